use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::TipSlider;

/// 配置文件路径环境变量
pub const CONFIG_ENV: &str = "TIPSPLIT_CONFIG";

/// 显示配置（config.toml）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub slider_steps: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            slider_steps: TipSlider::DEFAULT_STEPS,
        }
    }
}

impl Config {
    /// 从TOML文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> io::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> io::Result<()> {
        if self.slider_steps > TipSlider::MAX_STEPS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "slider_steps must be between 0 and {}, got {}",
                    TipSlider::MAX_STEPS,
                    self.slider_steps
                ),
            ));
        }
        Ok(())
    }
}

/// 配置文件路径：优先 $TIPSPLIT_CONFIG，否则 ~/.config/tipsplit/config.toml
pub fn config_path() -> io::Result<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV).map(PathBuf::from), dirs::config_dir())
}

fn resolve_config_path(
    override_path: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> io::Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let dir = config_dir
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate config directory"))?;
    Ok(dir.join("tipsplit").join("config.toml"))
}
