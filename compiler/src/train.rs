//! モデル学習モジュール
//!
//! このモジュールは、頻度辞書から単語分割モデルを学習し、
//! モデルディレクトリに書き出す機能を提供します。

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use wordseg::errors::WordsegError;
use wordseg::trainer::{FrequencyLexicon, Smoothing, Trainer};
use wordseg::Dictionary;

use crate::logging::LogArgs;

/// 学習コマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "train", about = "Unigram model trainer")]
pub struct Args {
    /// Frequency lexicon to be trained. Each line is a word and its count separated by
    /// whitespace.
    #[clap(short = 'i', long)]
    freq_in: PathBuf,

    /// Directory to which the model (lexicon, cost.uni, wordseg.conf) is output.
    #[clap(short = 'o', long)]
    model_out: PathBuf,

    /// Smoothing of the unigram costs.
    #[clap(long, default_value = "none", value_parser = ["none", "laplace"])]
    smoothing: String,

    #[clap(flatten)]
    logging: LogArgs,
}

/// 学習処理中に発生する可能性のあるエラー
#[derive(Debug, Error)]
pub enum TrainError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 学習処理エラー
    #[error("Training process failed: {0}")]
    Wordseg(#[from] WordsegError),

    /// ロガーの初期化エラー
    #[error("Failed to initialize the logger: {0}")]
    Logging(#[from] log::SetLoggerError),
}

/// 学習コマンドを実行する
///
/// # エラー
///
/// ファイルの読み書きや学習処理に失敗した場合、`TrainError`を返します。
pub fn run(args: Args) -> Result<(), TrainError> {
    args.logging.setup_logging(2)?;
    let smoothing: Smoothing = args.smoothing.parse()?;

    println!("Loading the frequency lexicon...");
    let dict = train_model(&args.freq_in, smoothing)?;
    log::info!(
        "trained {} words with {} smoothing",
        dict.lexicon().num_entries(),
        smoothing
    );

    println!("Writing the model to {}...", args.model_out.display());
    let config_path = dict.write_to_dir(&args.model_out)?;

    println!("Successfully trained the model: {}", config_path.display());
    Ok(())
}

/// 頻度辞書ファイルからモデルを学習する
///
/// CLIに依存しないコアの学習ロジックです。
pub fn train_model(freq_in: &Path, smoothing: Smoothing) -> Result<Dictionary, TrainError> {
    let freq = FrequencyLexicon::from_path(freq_in)?;
    let dict = Trainer::new().smoothing(smoothing).train(&freq)?;
    Ok(dict)
}
