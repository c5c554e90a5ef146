//! トレーナーの設定モジュール。
//!
//! このモジュールは、ユニグラムコストの推定方法に関する設定を管理します。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WordsegError;

/// コスト推定時の平滑化の種類。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
    /// 平滑化なしの最尤推定。
    ///
    /// 頻度0の単語のコストは無限大になり、問い合わせ時には未知語として扱われます。
    #[default]
    None,

    /// 総頻度に1を加え、各単語に`1 / 語彙数`の疑似頻度を加える加算平滑化。
    Laplace,
}

impl FromStr for Smoothing {
    type Err = WordsegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "laplace" => Ok(Self::Laplace),
            _ => Err(WordsegError::invalid_argument(
                "smoothing",
                format!("unknown smoothing {s:?}: expected `none` or `laplace`"),
            )),
        }
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Laplace => f.write_str("laplace"),
        }
    }
}

/// トレーナーの設定。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// 平滑化の種類
    #[serde(default)]
    pub smoothing: Smoothing,
}
