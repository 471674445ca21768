//! SystemUrlOpener - OS の URL オープンコマンドを起動
//!
//! - macOS: `open <url>`
//! - Windows: `rundll32 url.dll,FileProtocolHandler <url>`（`cmd` を通さないので `&` も解釈されない）
//! - それ以外: `xdg-open <url>`
//!
//! 子プロセスは別スレッドで wait して回収する（長寿命のホストでゾンビを残さない）。
//! 起動失敗・異常終了は warn ログのみ。

use crate::ports::UrlOpener;
use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(url: &Url) -> Command {
        #[cfg(target_os = "macos")]
        let mut cmd = Command::new("open");
        #[cfg(target_os = "windows")]
        let mut cmd = {
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler");
            cmd
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut cmd = Command::new("xdg-open");

        cmd.arg(url.as_str());
        cmd
    }
}

/// 子プロセスを起動し、終了を待つスレッドに渡す
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    let pid = child.id();
    Ok(thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(s) if s.success() => debug!(pid, "url opener exited"),
            Ok(s) => warn!(pid, status = %s, "url opener exited with failure"),
            Err(e) => warn!(pid, error = %e, "failed to wait for url opener"),
        }
        status
    }))
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &Url) {
        match spawn_reaped(Self::command(url)) {
            Ok(_) => info!(%url, "launched url opener"),
            Err(e) => warn!(%url, error = %e, "failed to launch url opener"),
        }
    }
}
