//! Encode stdin to LXNB text on stdout, or decode it back with `--decode`.
//!
//! Input is read in 4 KiB chunks and handed to the streaming adapters as it
//! arrives, so arbitrarily large inputs run in constant memory:
//!
//! ```text
//! $ printf 'Who NB?' | cargo run --example pipe
//! ḽχŃƅꞭӿƞÞḽxƝƃľx
//! $ printf 'Who NB?' | cargo run --example pipe | cargo run --example pipe -- --decode
//! Who NB?
//! ```
//!
//! Chunk boundaries are wherever `read` happens to stop; when decoding they
//! routinely fall inside a multi-byte symbol, which the decoder reassembles.
//! The encoder terminates its output with a newline, and the decoder skips
//! whitespace, so the two compose in a shell pipeline.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use lxnb::{DecoderOptions, StreamDecoder, StreamEncoder};

const CHUNK_SIZE: usize = 4 * 1024;

fn encode(input: &mut impl Read, output: &mut impl Write) -> io::Result<()> {
    let mut encoder = StreamEncoder::new();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut text = String::with_capacity(CHUNK_SIZE * 4);
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        text.clear();
        encoder.feed_into(&buf[..n], &mut text);
        output.write_all(text.as_bytes())?;
    }
    writeln!(output)?;
    eprintln!("encoded {} bytes", encoder.bytes_encoded());
    Ok(())
}

fn decode(input: &mut impl Read, output: &mut impl Write) -> io::Result<()> {
    let mut decoder = StreamDecoder::with_options(DecoderOptions {
        allow_whitespace: true,
        ..Default::default()
    });
    let mut buf = [0u8; CHUNK_SIZE];
    let mut bytes = Vec::with_capacity(CHUNK_SIZE);
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        bytes.clear();
        let result = decoder.feed_into(&buf[..n], &mut bytes);
        // Bytes before a bad unit are still valid output.
        output.write_all(&bytes)?;
        result.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    }
    let decoded = decoder.bytes_decoded();
    decoder
        .finish()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    eprintln!("decoded {decoded} bytes");
    Ok(())
}

fn main() -> ExitCode {
    let decoding = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("-d" | "--decode") => true,
        Some(other) => {
            eprintln!("unknown argument {other:?}; usage: pipe [--decode]");
            return ExitCode::FAILURE;
        }
    };

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let result = if decoding {
        decode(&mut stdin, &mut stdout)
    } else {
        encode(&mut stdin, &mut stdout)
    };

    match result.and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pipe: {err}");
            ExitCode::FAILURE
        }
    }
}
