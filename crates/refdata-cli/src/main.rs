//! 레퍼런스 데이터 관리 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # NASDAQ 주식 심볼 목록 적재
//! refdata load-securities -e NASDAQ -t STK -f symbols.csv
//!
//! # CASH 증권 종가로 USD 환율 갱신
//! refdata update-rates
//!
//! # 계정 비밀번호 해시 생성
//! refdata genpass my_password
//!
//! # 실행 중인 서버 원격 종료
//! refdata shutdown
//! ```

use clap::{Parser, Subcommand};
use refdata_core::{init_logging, AppConfig, SecType};
use tracing::error;

mod commands;

use commands::genpass::hash_password;
use commands::load_securities::{load_securities, LoadSecuritiesConfig};
use commands::shutdown::{shutdown, ShutdownConfig};
use commands::update_rates::{update_rates, UpdateRatesConfig};

#[derive(Parser)]
#[command(name = "refdata")]
#[command(about = "레퍼런스 데이터 관리 CLI - 증권/거래소 마스터 운영 도구", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 심볼 목록 파일을 security 테이블에 적재 (insert/update 자동 판별)
    LoadSecurities {
        /// 거래소 이름 (exchange 테이블 기준)
        #[arg(short, long)]
        exchange: String,

        /// 증권 유형 태그 (STK, CASH, CMDTY, FUT, OPT, IND, FOP, WAR, BOND, FUND)
        #[arg(short = 't', long)]
        sec_type: String,

        /// 심볼 목록 파일 경로
        #[arg(short, long)]
        file: String,

        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },

    /// CASH 증권 종가 기준 USD 환율 갱신
    UpdateRates {
        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },

    /// 계정 비밀번호 해시 생성
    Genpass {
        /// 평문 비밀번호
        password: String,
    },

    /// 실행 중인 서버 원격 종료
    Shutdown {
        /// 제어 엔드포인트 URL (기본: ws://127.0.0.1:9111/ot/)
        #[arg(short, long)]
        url: Option<String>,

        /// 로그인 사용자
        #[arg(long)]
        user: Option<String>,

        /// 로그인 비밀번호
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let app_config = AppConfig::load_default().unwrap_or_default();
    init_logging(&app_config.logging)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::LoadSecurities {
            exchange,
            sec_type,
            file,
            db_url,
        } => {
            let sec_type: SecType = match sec_type.parse() {
                Ok(sec_type) => sec_type,
                Err(e) => {
                    error!("Invalid sec_type: {}", sec_type);
                    return Err(e.into());
                }
            };

            let config = LoadSecuritiesConfig {
                exchange: exchange.clone(),
                sec_type,
                file: file.clone(),
                db_url,
            };

            match load_securities(config).await {
                Ok(report) => {
                    println!("\n✅ 적재 완료: {}", file);
                    println!("   삽입: {}건", report.inserted);
                    println!("   갱신: {}건", report.updated);
                }
                Err(e) => {
                    error!("Load failed: {:#}", e);
                    return Err(e.into());
                }
            }
        }

        Commands::UpdateRates { db_url } => {
            match update_rates(UpdateRatesConfig { db_url }).await {
                Ok(report) => {
                    println!("\n✅ 환율 갱신 완료");
                    println!("   통화쌍: {}개", report.pairs);
                    println!("   갱신된 증권: {}건", report.updated_rows);
                }
                Err(e) => {
                    error!("Rate update failed: {:#}", e);
                    return Err(e.into());
                }
            }
        }

        Commands::Genpass { password } => {
            println!("{}", hash_password(&password));
        }

        Commands::Shutdown { url, user, password } => {
            let config = ShutdownConfig {
                url,
                user,
                password,
            };

            match shutdown(config).await {
                Ok(()) => {
                    println!("\n✅ 종료 명령 전송 완료");
                }
                Err(e) => {
                    error!("Shutdown failed: {:#}", e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
