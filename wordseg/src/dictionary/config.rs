//! モデル設定ファイル
//!
//! 語彙ファイルとコストファイルの場所を記述するJSON設定を扱います。
//!
//! ```json
//! {
//!   "lexicon_path": "lexicon",
//!   "unicost_path": "cost.uni"
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// モデルを構成するファイルの場所
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 語彙ファイルへのパス
    pub lexicon_path: PathBuf,

    /// ユニグラムコストファイルへのパス
    pub unicost_path: PathBuf,
}

impl ModelConfig {
    /// 新しいインスタンスを作成します。
    pub fn new<P, Q>(lexicon_path: P, unicost_path: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            lexicon_path: lexicon_path.into(),
            unicost_path: unicost_path.into(),
        }
    }

    /// リーダーから設定を読み込みます。
    ///
    /// パスは書かれたまま保持されます。
    pub fn read<R: Read>(rdr: R) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }

    /// 設定を整形済みJSONとして書き出します。
    pub fn write<W: Write>(&self, mut wtr: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut wtr, self)?;
        wtr.write_all(b"\n")?;
        wtr.flush()?;
        Ok(())
    }

    /// ファイルから設定を読み込みます。
    ///
    /// 相対パスは設定ファイルが置かれたディレクトリを基準に解決されます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合、またはJSONとして解釈できない場合にエラーを返します。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::read(BufReader::new(File::open(path)?))?;
        if let Some(base) = path.parent() {
            config.lexicon_path = resolve(base, &config.lexicon_path);
            config.unicost_path = resolve(base, &config.unicost_path);
        }
        Ok(config)
    }

    /// ファイルに設定を書き出します。
    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write(BufWriter::new(File::create(path)?))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fields() {
        let json = r#"{"lexicon_path": "lex", "unicost_path": "/abs/cost.uni"}"#;
        let config = ModelConfig::read(json.as_bytes()).unwrap();
        assert_eq!(config, ModelConfig::new("lex", "/abs/cost.uni"));
    }

    #[test]
    fn test_write_read() {
        let config = ModelConfig::new("lexicon", "cost.uni");
        let mut buf = vec![];
        config.write(&mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.contains("\"lexicon_path\": \"lexicon\""));
        assert!(text.contains("\"unicost_path\": \"cost.uni\""));
        assert_eq!(ModelConfig::read(buf.as_slice()).unwrap(), config);
    }

    #[test]
    fn test_missing_field() {
        let json = r#"{"lexicon_path": "lex"}"#;
        assert!(ModelConfig::read(json.as_bytes()).is_err());
    }

    #[test]
    fn test_from_path_resolves_relative() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordseg.conf");
        ModelConfig::new("lexicon", "/tmp/cost.uni")
            .to_path(&path)
            .unwrap();

        let config = ModelConfig::from_path(&path).unwrap();
        assert_eq!(config.lexicon_path, dir.path().join("lexicon"));
        assert_eq!(config.unicost_path, PathBuf::from("/tmp/cost.uni"));
    }
}
