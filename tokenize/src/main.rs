//! 単語分割を実行するユーティリティ
//!
//! このバイナリは、入力から一行ずつ読み込んだテキストを単語分割し、
//! 指定された出力形式（wakati、detail）で結果を出力します。

mod logging;

use std::borrow::Cow;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use wordseg::segmenter::worker::Worker;
use wordseg::Segmenter;

use clap::Parser;

use crate::logging::LogArgs;

/// 出力モード
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputMode {
    Wakati,
    Detail,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "wakati" => Ok(Self::Wakati),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Segments text into words")]
struct Args {
    /// Model config file (wordseg.conf).
    #[clap(short = 'c', long)]
    config: PathBuf,

    /// Input file. '-' reads from stdin.
    #[clap(short = 'i', long, default_value = "-")]
    input: String,

    /// Output file. '-' writes to stdout.
    #[clap(short = 'o', long, default_value = "-")]
    output: String,

    /// Output mode. Choices are wakati and detail.
    #[clap(short = 'O', long, default_value = "wakati")]
    output_mode: OutputMode,

    /// Segments only the given 0-based field of each delimited line.
    #[clap(short = 'f', long)]
    field: Option<usize>,

    /// Field delimiter used with --field.
    #[clap(short = 'd', long, default_value = "\t")]
    delimiter: char,

    #[clap(flatten)]
    logging: LogArgs,
}

/// 分割結果を空白区切りで書き出す
///
/// 単語内部の空白は取り除き、空になった単語は出力しません。
fn write_wakati<W: Write>(worker: &Worker, out: &mut W) -> std::io::Result<()> {
    let mut first = true;
    for word in worker.word_iter() {
        let surface: String = word.surface().chars().filter(|&c| c != ' ').collect();
        if surface.is_empty() {
            continue;
        }
        if !first {
            out.write_all(b" ")?;
        }
        out.write_all(surface.as_bytes())?;
        first = false;
    }
    Ok(())
}

/// 分割結果を単語ごとの詳細とともに書き出す
fn write_detail<W: Write>(worker: &Worker, out: &mut W) -> std::io::Result<()> {
    for word in worker.word_iter() {
        let word_id = word
            .word_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        writeln!(
            out,
            "{:?}\trange={:?}\tword_id={}\tknown={}\tword_cost={}\ttotal_cost={}",
            word.surface(),
            word.range_byte(),
            word_id,
            word.is_known(),
            word.word_cost(),
            word.total_cost(),
        )?;
    }
    out.write_all(b"EOS\n")
}

/// 一つのテキストを分割して書き出す
///
/// 分割に失敗した場合は警告を出力し、空の結果として扱います。
fn segment_and_write<W: Write>(
    worker: &mut Worker,
    text: &str,
    mode: OutputMode,
    out: &mut W,
) -> std::io::Result<()> {
    worker.reset_sentence(text);
    if let Err(e) = worker.segment() {
        log::warn!("failed to segment {text:?}: {e}");
    }
    match mode {
        OutputMode::Wakati => write_wakati(worker, out),
        OutputMode::Detail => write_detail(worker, out),
    }
}

/// 一行を処理する
///
/// `field`が指定された場合は、区切り文字で分けたその列だけを分割し、
/// 列を区切り文字で結合し直して出力します。列数が足りない行はそのまま出力します。
fn process_line<W: Write>(
    worker: &mut Worker,
    line: &str,
    args: &Args,
    out: &mut W,
) -> std::io::Result<()> {
    let Some(field) = args.field else {
        segment_and_write(worker, line, args.output_mode, out)?;
        if args.output_mode == OutputMode::Wakati {
            out.write_all(b"\n")?;
        }
        return Ok(());
    };

    let fields: Vec<&str> = line.split(args.delimiter).collect();
    if fields.len() <= field {
        log::debug!("line has only {} fields: {line:?}", fields.len());
        out.write_all(line.as_bytes())?;
        return out.write_all(b"\n");
    }

    let mut delim = [0; 4];
    let delim = args.delimiter.encode_utf8(&mut delim).as_bytes();
    match args.output_mode {
        OutputMode::Wakati => {
            for (i, f) in fields.iter().enumerate() {
                if i != 0 {
                    out.write_all(delim)?;
                }
                if i == field {
                    segment_and_write(worker, f, OutputMode::Wakati, out)?;
                } else {
                    out.write_all(f.as_bytes())?;
                }
            }
            out.write_all(b"\n")
        }
        OutputMode::Detail => segment_and_write(worker, fields[field], OutputMode::Detail, out),
    }
}

/// 入力を一行ずつ処理する
///
/// UTF-8として不正な行は警告を出力し、不正なバイトを置換文字に置き換えて処理を続けます。
fn process_stream<R: BufRead, W: Write>(
    worker: &mut Worker,
    mut rdr: R,
    args: &Args,
    out: &mut W,
    is_tty: bool,
) -> std::io::Result<()> {
    let mut buf = vec![];
    let mut lineno = 0;
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        lineno += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::warn!("line {lineno} is not valid UTF-8; invalid bytes are replaced");
        }
        process_line(worker, &line, args, out)?;
        if is_tty {
            out.flush()?;
        }
    }
}

/// メイン関数
///
/// モデルをロードし、入力から読み込んだテキストを単語分割して、
/// 指定された形式で結果を出力します。
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    eprintln!("Loading the model...");
    let segmenter = Segmenter::from_config_path(&args.config)?;
    let mut worker = segmenter.new_worker();

    eprintln!("Ready to segment");

    let rdr: Box<dyn BufRead> = if args.input == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };

    let (wtr, is_tty): (Box<dyn Write>, bool) = if args.output == "-" {
        (
            Box::new(std::io::stdout().lock()),
            atty::is(atty::Stream::Stdout),
        )
    } else {
        (Box::new(File::create(&args.output)?), false)
    };
    let mut out = BufWriter::new(wtr);

    process_stream(&mut worker, rdr, &args, &mut out, is_tty)?;
    out.flush()?;

    Ok(())
}
