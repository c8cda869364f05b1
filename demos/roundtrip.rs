use lz78_rs::{CompressionStats, Decoder, Encoder};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Something that yields the bytes to compress.
trait ByteSource {
    fn read(&self) -> io::Result<Vec<u8>>;
}

struct FileSource(PathBuf);

impl ByteSource for FileSource {
    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.0)
    }
}

fn report(stats: &CompressionStats, encode_time: Duration, decode_time: Duration, roundtrip_ok: bool) {
    println!("\n=== LZ78 ===");
    println!("Source data length: {}", stats.source_length);
    println!("Encoded data length: {}", stats.encoded_length);
    println!("Records: {}", stats.records);
    println!("Compression rate: {:.2}%", stats.compression_ratio());
    println!("Encoding cost time: {:.2} ms", encode_time.as_secs_f64() * 1000.0);
    println!("Decoding cost time: {:.2} ms", decode_time.as_secs_f64() * 1000.0);
    println!("Source data == decoded data: {}", roundtrip_ok);
}

/// Compresses a file, decompresses it again and reports the result.
///
/// Usage: cargo run --example roundtrip <filename>
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lz78_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let source = FileSource(PathBuf::from(&args[1]));
    let data = source.read().unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\": {}", args[1], err);
        std::process::exit(1);
    });

    let start = Instant::now();
    let records = Encoder::new().encode(&data).unwrap_or_else(|err| {
        eprintln!("Encoding failed: {}", err);
        std::process::exit(1);
    });
    let encode_time = start.elapsed();

    let start = Instant::now();
    let decoded = Decoder::new().decode(&records).unwrap_or_else(|err| {
        eprintln!("Decoding failed: {}", err);
        std::process::exit(1);
    });
    let decode_time = start.elapsed();

    let stats = CompressionStats::from_records(&data, &records);
    report(&stats, encode_time, decode_time, decoded == data);
}
