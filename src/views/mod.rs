//! HTML 뷰 렌더링
//!
//! 템플릿 엔진 없이 서버에서 HTML 문자열을 조립합니다.
//! 사용자 입력은 모두 [`escape_html`]을 거쳐 삽입됩니다.

use crate::domain::dto::users::response::SecretEntry;
use crate::utils::string_utils::escape_html;

const GOOGLE_BUTTON: &str = r#"<a class="btn btn-block" href="/auth/google" role="button">Sign in with Google</a>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        body
    )
}

fn credential_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"<form action="{}" method="POST">
    <label for="username">Email</label>
    <input type="text" id="username" name="username" required>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">{}</button>
  </form>"#,
        action, submit_label
    )
}

fn google_section(google_enabled: bool) -> &'static str {
    if google_enabled { GOOGLE_BUTTON } else { "" }
}

/// 랜딩 페이지
pub fn home() -> String {
    layout(
        "Secrets",
        r#"<div class="jumbotron centered">
  <h1 class="display-3">Secrets</h1>
  <p class="lead">Don't keep your secrets, share them anonymously!</p>
  <hr>
  <a class="btn btn-light" href="/register" role="button">Register</a>
  <a class="btn btn-dark" href="/login" role="button">Login</a>
</div>"#,
    )
}

/// 로그인 폼
pub fn login(google_enabled: bool) -> String {
    let body = format!(
        "<div class=\"container\">\n  <h1>Login</h1>\n  {}\n  {}\n</div>",
        credential_form("/login", "Login"),
        google_section(google_enabled)
    );
    layout("Login", &body)
}

/// 회원가입 폼
pub fn register(google_enabled: bool) -> String {
    let body = format!(
        "<div class=\"container\">\n  <h1>Register</h1>\n  {}\n  {}\n</div>",
        credential_form("/register", "Register"),
        google_section(google_enabled)
    );
    layout("Register", &body)
}

/// 로그인 사용자 전용 고정 시크릿 페이지
pub fn secrets_private() -> String {
    layout(
        "Secrets",
        r#"<div class="jumbotron text-center">
  <h1 class="display-3">You've Discovered My Secret!</h1>
  <p class="secret-text">Jack Bauer is my hero.</p>
  <hr>
  <a class="btn btn-light" href="/logout" role="button">Log Out</a>
  <a class="btn btn-dark" href="/submit" role="button">Submit a Secret</a>
</div>"#,
    )
}

/// 모든 사용자의 시크릿 목록
///
/// 호출자의 로그인 여부에 따라 하단 링크가 달라집니다.
pub fn secrets_public(entries: &[SecretEntry], authenticated: bool) -> String {
    let items: String = entries
        .iter()
        .flat_map(|entry| entry.secrets.iter())
        .map(|secret| format!("  <p class=\"secret-text\">{}</p>\n", escape_html(secret)))
        .collect();

    let links = if authenticated {
        r#"<a class="btn btn-light" href="/logout" role="button">Log Out</a>
  <a class="btn btn-dark" href="/submit" role="button">Submit a Secret</a>"#
    } else {
        r#"<a class="btn btn-light" href="/register" role="button">Register</a>
  <a class="btn btn-dark" href="/login" role="button">Login</a>"#
    };

    let body = format!(
        "<div class=\"jumbotron text-center\">\n  <h1 class=\"display-3\">You've Discovered My Secret!</h1>\n{}  <hr>\n  {}\n</div>",
        items, links
    );
    layout("Secrets", &body)
}

/// 시크릿 제출 폼
pub fn submit() -> String {
    layout(
        "Submit a Secret",
        r#"<div class="container">
  <h1 class="display-3">Secrets</h1>
  <p class="secret-text">Don't keep your secrets, share them anonymously!</p>
  <form action="/submit" method="POST">
    <input type="text" class="form-control" name="secret" placeholder="What's your secret?" required>
    <button type="submit">Submit</button>
  </form>
</div>"#,
    )
}
