use criterion::{Criterion, criterion_group, criterion_main};
use std::io::Cursor;
use streamtrim::{FastqReader, PhredDecoder, QualityEncoding, TailTrimmer, Trimmer};

fn bench_parse_and_trim(c: &mut Criterion) {
    let mut data = String::new();
    for i in 0..2000 {
        data.push_str(&format!("@r{i}\nACGTACGTACGTACGT\n+\nIIIIIIII555555!!\n"));
    }

    c.bench_function("parse_2000", |b| {
        b.iter(|| {
            let fq = FastqReader::from_bufread(Cursor::new(data.clone().into_bytes()));
            let mut n = 0usize;
            for rec in fq {
                n += rec.unwrap().len();
            }
            n
        })
    });

    c.bench_function("parse_and_tail_trim_2000", |b| {
        let trimmer = TailTrimmer::new(Box::new(PhredDecoder::new(QualityEncoding::Sanger)));
        b.iter(|| {
            let fq = FastqReader::from_bufread(Cursor::new(data.clone().into_bytes()));
            let mut kept = 0usize;
            for rec in fq {
                kept += trimmer.trim(&rec.unwrap()).unwrap().len();
            }
            kept
        })
    });
}

criterion_group!(benches, bench_parse_and_trim);
criterion_main!(benches);
