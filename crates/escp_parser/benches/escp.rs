use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use escp_parser::{EscpParser, SliceSource, TraceSink};
use std::hint::black_box;

struct NullSink;

impl TraceSink for NullSink {
    #[inline]
    fn print(&mut self, _text: &str) { /* discard */
    }

    #[inline]
    fn line_break(&mut self) { /* discard */
    }
}

fn make_inputs() -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let text = "HELLO WORLD. 0123456789\r\n".repeat(10_000).into_bytes();

    let mut command_heavy = Vec::new();
    for _ in 0..8_000 {
        command_heavy.extend_from_slice(b"\x1B@\x1BU\x01\x1B+\x2D\x1BD\x08\x10\x18\x00ok\r");
    }

    let mut graphics = Vec::new();
    for _ in 0..2_000 {
        graphics.extend_from_slice(&[0x1B, 0x2A, 7, 16, 0]);
        graphics.extend(0u8..48);
    }

    (text, command_heavy, graphics)
}

fn bench_escp_parser(c: &mut Criterion) {
    let (text, command_heavy, graphics) = make_inputs();
    let mut group = c.benchmark_group("escp_parser");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("plain_text", |b| {
        let mut parser = EscpParser::new();
        let mut sink = NullSink;
        b.iter(|| {
            let mut source = SliceSource::new(black_box(&text));
            let _ = parser.parse(&mut source, &mut sink);
        });
    });

    group.throughput(Throughput::Bytes(command_heavy.len() as u64));
    group.bench_function("command_heavy", |b| {
        let mut parser = EscpParser::new();
        let mut sink = NullSink;
        b.iter(|| {
            let mut source = SliceSource::new(black_box(&command_heavy));
            let _ = parser.parse(&mut source, &mut sink);
        });
    });

    group.throughput(Throughput::Bytes(graphics.len() as u64));
    group.bench_function("graphics_columns", |b| {
        let mut parser = EscpParser::new();
        let mut sink = NullSink;
        b.iter(|| {
            let mut source = SliceSource::new(black_box(&graphics));
            let _ = parser.parse(&mut source, &mut sink);
        });
    });

    group.finish();
}

criterion_group!(
    name = escp;
    config = Criterion::default().with_plots();
    targets = bench_escp_parser
);
criterion_main!(escp);
