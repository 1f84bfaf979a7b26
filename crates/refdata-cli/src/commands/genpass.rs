//! 비밀번호 해시 생성 명령.
//!
//! 서버가 계정 테이블에 저장하는 형식(SHA-1 16진수)의 해시를 만듭니다.

use sha1::{Digest, Sha1};

/// 평문 비밀번호의 SHA-1 16진수 해시를 반환합니다.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
