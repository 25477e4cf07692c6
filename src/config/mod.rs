#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::DrillsConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pac-drills")]
#[command(about = "Small practice programs: array stats, hello server, worker pool and DSA drills")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔（若有指定），再套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::Result<DrillsConfig> {
        let mut config = match &self.config {
            Some(path) => DrillsConfig::from_file(path)?,
            None => DrillsConfig::default(),
        };

        if self.verbose {
            config.logging.verbose = true;
        }
        self.command.apply_overrides(&mut config);
        Ok(config)
    }
}
