use streamtrim::{
    NumericDecoder, PhredDecoder, QualityDecoder, QualityEncoding, SeqRecord, TailTrimmer,
    Trimmer, WindowTrimmer,
};

fn sanger() -> Box<dyn QualityDecoder> {
    Box::new(PhredDecoder::new(QualityEncoding::Sanger))
}

#[test]
fn sanger_decode() {
    let scores = sanger().decode("!!!!").unwrap();
    assert_eq!(scores, vec![0, 0, 0, 0]);
    let scores = sanger().decode("I5!").unwrap();
    assert_eq!(scores, vec![40, 20, 0]);
}

#[test]
fn out_of_range_character_is_rejected() {
    // 'J' decodes to 41, above the Sanger upper bound of 40.
    let err = sanger().decode("IJ").unwrap_err();
    assert_eq!(err.quality, "IJ");
    // Fine under Illumina 1.8 (upper bound 41).
    assert!(
        PhredDecoder::new(QualityEncoding::Illumina18)
            .decode("IJ")
            .is_ok()
    );
}

#[test]
fn numeric_decode() {
    let scores = NumericDecoder.decode("40 0 12  7").unwrap();
    assert_eq!(scores, vec![40, 0, 12, 7]);
    assert!(NumericDecoder.decode("40 x 12").is_err());
}

#[test]
fn all_zero_quality_trims_to_nothing() {
    let trimmer = TailTrimmer::new(sanger());
    let rec = SeqRecord::new("r1", "ACGT", "!!!!");
    let out = trimmer.trim(&rec).unwrap();
    assert_eq!(out, SeqRecord::new("r1", "", ""));
}

#[test]
fn high_quality_read_is_untouched() {
    let trimmer = TailTrimmer::new(sanger());
    let rec = SeqRecord::new("r1", "ACGTACGT", "IIIIIIII");
    assert_eq!(trimmer.trim(&rec).unwrap(), rec);
}

#[test]
fn low_quality_tail_is_cut() {
    // Scores: 40x6 then 0x4; every suffix inside the tail fails the cutoff,
    // ratcheting the cut index back to 6.
    let trimmer = TailTrimmer::new(sanger()).cutoff(18);
    let rec = SeqRecord::new("r1", "ACGTACGTAC", "IIIIII!!!!");
    let out = trimmer.trim(&rec).unwrap();
    assert_eq!(out.seq, "ACGTAC");
    assert_eq!(out.qual, "IIIIII");
}

#[test]
fn trimmed_length_shrinks_as_cutoff_grows() {
    // Scores: 40,40,40,40,40,20,20,20,0,0.
    let rec = SeqRecord::new("r1", "ACGTACGTAC", "IIIII555!!");
    for (cutoff, expect) in [(0, 10), (10, 8), (18, 8), (21, 5), (41, 0)] {
        let out = TailTrimmer::new(sanger()).cutoff(cutoff).trim(&rec).unwrap();
        assert_eq!(out.len(), expect, "cutoff {cutoff}");
    }
}

#[test]
fn min_length_rejects_short_survivors() {
    let rec = SeqRecord::new("r1", "ACGTACGTAC", "IIIIII!!!!");
    let out = TailTrimmer::new(sanger())
        .cutoff(18)
        .min_length(8)
        .trim(&rec)
        .unwrap();
    assert_eq!(out, SeqRecord::rejected("r1"));

    let out = TailTrimmer::new(sanger())
        .cutoff(18)
        .min_length(6)
        .trim(&rec)
        .unwrap();
    assert_eq!(out.len(), 6);
}

#[test]
fn window_trimmer_never_truncates() {
    // Scores: 40x5, 20x3, 0x2. The endmost 5-window sums to 60 < 18*5.
    let rec = SeqRecord::new("r1", "ACGTACGTAC", "IIIII555!!");

    let out = WindowTrimmer::with_window(sanger(), 5)
        .cutoff(18)
        .trim(&rec)
        .unwrap();
    assert_eq!(out, SeqRecord::rejected("r1"));

    // Every 5-window clears 10*5.
    let out = WindowTrimmer::with_window(sanger(), 5)
        .cutoff(10)
        .trim(&rec)
        .unwrap();
    assert_eq!(out, rec);
}

#[test]
fn whole_sequence_window() {
    // Total 260 over 10 bases: mean 26.
    let rec = SeqRecord::new("r1", "ACGTACGTAC", "IIIII555!!");
    assert_eq!(
        WindowTrimmer::whole_sequence(sanger())
            .cutoff(26)
            .trim(&rec)
            .unwrap(),
        rec
    );
    assert_eq!(
        WindowTrimmer::whole_sequence(sanger())
            .cutoff(27)
            .trim(&rec)
            .unwrap(),
        SeqRecord::rejected("r1")
    );
}

#[test]
fn default_window_is_twenty_bases() {
    // 21 bases, scores 40 then 17x20. The endmost 20-window sums to
    // 340 < 18*20 and rejects under the default window, while the
    // whole-sequence sum of 380 clears 18*21.
    let rec = SeqRecord::new("r1", &"A".repeat(21), &format!("I{}", "2".repeat(20)));
    assert_eq!(
        WindowTrimmer::new(sanger()).cutoff(18).trim(&rec).unwrap(),
        SeqRecord::rejected("r1")
    );
    assert_eq!(
        WindowTrimmer::whole_sequence(sanger())
            .cutoff(18)
            .trim(&rec)
            .unwrap(),
        rec
    );
}

#[test]
fn reads_shorter_than_window_are_kept() {
    let rec = SeqRecord::new("r1", "ACGT", "!!!!");
    let out = WindowTrimmer::with_window(sanger(), 20)
        .cutoff(18)
        .trim(&rec)
        .unwrap();
    assert_eq!(out, rec);
}

#[test]
fn undecodable_quality_propagates() {
    // Solexa characters under a Sanger decoder.
    let rec = SeqRecord::new("r1", "ACGT", "hh  ");
    assert!(TailTrimmer::new(sanger()).trim(&rec).is_err());
}
