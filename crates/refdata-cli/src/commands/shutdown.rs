//! 원격 서버 종료 명령.
//!
//! 서버의 WebSocket 제어 엔드포인트에 접속해 로그인한 뒤 종료 명령을
//! 보냅니다. 서버가 연결을 닫을 때까지 수신한 메시지를 출력합니다.

use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use refdata_core::{AppConfig, ControlConfig};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use tracing::info;

/// 종료 명령 설정. 지정하지 않은 값은 설정 파일/기본값을 따릅니다.
#[derive(Debug, Default)]
pub struct ShutdownConfig {
    /// 제어 엔드포인트 URL
    pub url: Option<String>,
    /// 로그인 사용자
    pub user: Option<String>,
    /// 로그인 비밀번호
    pub password: Option<String>,
}

/// 로그인 프레임 (JSON 배열).
fn login_frame(user: &str, password: &str) -> String {
    serde_json::json!(["login", user, password]).to_string()
}

/// 종료 프레임. 3초 유예 후 종료 코드 1로 종료를 요청합니다.
fn shutdown_frame() -> String {
    serde_json::json!(["shutdown", 3, 1]).to_string()
}

/// 서버에 종료 명령을 보냅니다.
pub async fn shutdown(config: ShutdownConfig) -> Result<()> {
    let defaults: ControlConfig = AppConfig::load_default().unwrap_or_default().control;
    let url = config.url.unwrap_or(defaults.url);
    let user = config.user.unwrap_or(defaults.user);
    let password = config.password.unwrap_or(defaults.password);

    let (stream, _) = connect_async(url.as_str())
        .await
        .with_context(|| format!("Failed to connect to control endpoint {url}"))?;
    info!(url = %url, "control channel opened");

    let (mut write, mut read) = stream.split();
    write.send(Message::Text(login_frame(&user, &password))).await?;
    write.send(Message::Text(shutdown_frame())).await?;

    while let Some(message) = read.next().await {
        match message? {
            Message::Text(text) => println!("{}", text),
            Message::Close(_) => {
                info!("control channel closed by server");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
