//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 拆分过程中的致命错误；缺少 id 的条目不算错误
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to create output directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input file '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file '{}' is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("top-level JSON value is not an object")]
    NotAnObject,

    #[error("field '{0}' is present but is not an array")]
    ElementsNotArray(&'static str),

    /// id 的字符串形式无法作为输出目录内的文件名
    #[error("element id {0:?} cannot be used as a file name")]
    InvalidId(String),

    #[error("failed to serialize element {id}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{}'", path.display())]
    WriteElement {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;
