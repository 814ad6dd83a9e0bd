/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함 (없으면 `/login`으로 리다이렉트)
    Required,
    /// 인증이 선택사항임 (있으면 복원, 없어도 허용)
    Optional,
}

/// 프로바이더별 인증 자격 증명
///
/// `CredentialService::authenticate`가 변형에 따라 적절한 인증 경로로 분배합니다.
pub enum Credentials {
    /// 사용자명/비밀번호
    Local { username: String, password: String },
    /// Google OAuth Authorization Code
    Google { code: String },
}

// 비밀번호와 인가 코드가 로그에 남지 않도록 Debug를 직접 구현
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Local { username, .. } => f
                .debug_struct("Local")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::Google { .. } => f.debug_struct("Google").field("code", &"***").finish(),
        }
    }
}
