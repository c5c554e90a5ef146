//! wordseg モデルコンパイラのメインエントリーポイント
//!
//! このモジュールは、単語分割モデルを構築するためのサブコマンドを提供します。

mod logging;
mod train;

use clap::Parser;
use thiserror::Error;

use crate::train::TrainError;

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// 頻度辞書からモデルを学習します
    ///
    /// 単語ごとの頻度からユニグラムコストを推定し、語彙、コスト、設定ファイルを
    /// モデルディレクトリに出力します。
    Train(train::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// モデル学習中のエラー
    #[error(transparent)]
    TrainError(#[from] TrainError),
}

fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Train(args) => Ok(train::run(args)?),
    }
}
