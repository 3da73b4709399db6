//! 错误类型

use thiserror::Error;

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 无法识别的可渲染值
    #[error("unresolvable renderable: {found}")]
    Unresolvable { found: String },

    /// 配置解析失败
    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read render config: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn unresolvable(found: impl std::fmt::Debug) -> Self {
        Self::Unresolvable {
            found: format!("{:?}", found),
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::Unresolvable { .. })
    }
}
