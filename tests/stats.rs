use streamtrim::{
    Distribution, GcStats, LengthStats, PhredDecoder, QualityEncoding, QualityStats, RecordSink,
    SeqRecord, SinkKind,
};

#[test]
fn distribution_of_two_values() {
    let mut dist = Distribution::new();
    let (first, second) = (2.0, 3.0);
    dist.add(first);
    dist.add(second);

    assert_eq!(dist.count(), 2);
    assert_eq!(dist.mean(), (first + second) / 2.0);
    assert_eq!(dist.min(), first);
    assert_eq!(dist.max(), second);
    // Sample variance of {2, 3} is 0.5.
    assert!((dist.sd() - 0.5_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn distribution_of_a_single_value() {
    let mut dist = Distribution::new();
    dist.add(7.0);
    assert_eq!(dist.count(), 1);
    assert_eq!(dist.mean(), 7.0);
    assert_eq!(dist.min(), 7.0);
    assert_eq!(dist.max(), 7.0);
    assert_eq!(dist.sd(), 0.0);
}

#[test]
fn quality_stats_tracks_per_position_distributions() {
    let mut stats = QualityStats::new(Box::new(PhredDecoder::new(QualityEncoding::Sanger)));
    assert_eq!(stats.kind(), SinkKind::QualityStats);

    // Scores 40,40,40,40 and 0,20.
    stats.on_record(&SeqRecord::new("r1", "ACGT", "IIII")).unwrap();
    stats.on_record(&SeqRecord::new("r2", "AC", "!5")).unwrap();

    let positions = stats.positions();
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[0].count(), 2);
    assert_eq!(positions[0].mean(), 20.0);
    assert_eq!(positions[1].mean(), 30.0);
    assert_eq!(positions[2].count(), 1);
    assert_eq!(positions[3].max(), 40.0);
}

#[test]
fn quality_stats_skips_undecodable_records_without_aborting() {
    let mut stats = QualityStats::new(Box::new(PhredDecoder::new(QualityEncoding::Sanger)));

    stats.on_record(&SeqRecord::new("r1", "ACGT", "IIII")).unwrap();
    // 'h' decodes to 71 under offset 33, outside the Sanger range; the
    // record is logged and dropped, not an error.
    stats.on_record(&SeqRecord::new("bad", "ACGT", "hhhh")).unwrap();
    stats.on_record(&SeqRecord::new("r3", "ACGT", "!!!!")).unwrap();

    let positions = stats.positions();
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[0].count(), 2);
    assert_eq!(positions[0].mean(), 20.0);
}

#[test]
fn quality_stats_ignores_rejected_records() {
    let mut stats = QualityStats::new(Box::new(PhredDecoder::new(QualityEncoding::Sanger)));
    stats.on_record(&SeqRecord::rejected("r1")).unwrap();
    assert!(stats.positions().is_empty());
}

#[test]
fn length_and_gc_stats_expose_their_distributions() {
    let mut lengths = LengthStats::new();
    let mut gc = GcStats::new();
    for rec in [
        SeqRecord::new("r1", "GGGGCC", "IIIIII"),
        SeqRecord::new("r2", "AT", "II"),
    ] {
        lengths.on_record(&rec).unwrap();
        gc.on_record(&rec).unwrap();
    }

    assert_eq!(lengths.distribution().count(), 2);
    assert_eq!(lengths.distribution().mean(), 4.0);
    assert_eq!(lengths.distribution().min(), 2.0);
    assert_eq!(lengths.distribution().max(), 6.0);

    // 6 GC over 8 bases globally; per-record fractions 1.0 and 0.0.
    assert_eq!(gc.gc_content(), 0.75);
    assert_eq!(gc.distribution().mean(), 0.5);
    assert_eq!(gc.distribution().max(), 1.0);
}
