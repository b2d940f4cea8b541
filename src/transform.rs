use std::{
    borrow::Cow,
    fs::{self, File},
    io::{self, stdin, stdout, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{escape, unescape};

/// Script read when no input is given.
pub const DEFAULT_INPUT: &str = "LogicMonitor_Portal_Alert_Statistics_COLLECT.groovy";

/// File written when no output is given.
pub const DEFAULT_OUTPUT: &str = "encoded_script.txt";

/// Path that stands for stdin as an input, or stdout as an output.
pub const STDIO: &str = "-";

/// What a single run of [encode_file] or [decode_file] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    /// Characters escaped when encoding, or references resolved when decoding.
    pub references: usize,
}

/// Escape the text in `input` and write it to `output`.
///
/// The input is read completely before `output` is created, so a missing or
/// non-UTF-8 input never touches an existing output file.
pub fn encode_file(input: &Path, output: &Path) -> anyhow::Result<Summary> {
    let text = read_input(input)?;
    let references = escape::count_reserved(&text);
    let escaped = escape::escape(&text);
    debug!("Escaped {references} reserved characters");

    write_output(output, &escaped)?;

    Ok(Summary {
        input: input.to_owned(),
        output: output.to_owned(),
        bytes_read: text.len(),
        bytes_written: escaped.len(),
        references,
    })
}

/// Resolve the character references in `input` and write the text to `output`.
pub fn decode_file(input: &Path, output: &Path) -> anyhow::Result<Summary> {
    let text = read_input(input)?;
    let references = unescape::count_references(&text);
    let unescaped: Cow<str> =
        unescape::unescape(&text).with_context(|| format!("decoding {:?}", input))?;
    debug!("Resolved {references} character references");

    write_output(output, &unescaped)?;

    Ok(Summary {
        input: input.to_owned(),
        output: output.to_owned(),
        bytes_read: text.len(),
        bytes_written: unescaped.len(),
        references,
    })
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let text = if is_stdio(path) {
        info!("Reading stdin");
        let mut text = String::new();
        stdin()
            .lock()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        text
    } else {
        info!("Reading {:?}", path);
        fs::read_to_string(path).with_context(|| format!("reading input file {:?}", path))?
    };
    debug!("Read {} bytes", text.len());
    Ok(text)
}

fn write_output(path: &Path, text: &str) -> anyhow::Result<()> {
    if is_stdio(path) {
        let mut out = stdout().lock();
        return write_all(&mut out, text).context("writing stdout");
    }

    info!("Writing {:?}", path);
    let file = File::create(path).with_context(|| format!("creating output file {:?}", path))?;
    write_all(&mut BufWriter::new(file), text)
        .with_context(|| format!("writing output file {:?}", path))
}

fn write_all(w: &mut impl Write, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    w.flush()
}
