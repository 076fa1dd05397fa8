/// Payload-free classification of authentication failures.
///
/// Consumers branch on the kind and show [`AuthErrorKind::user_message`];
/// they never inspect provider messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    InvalidCredential,
    PrincipalNotFound,
    PrincipalAlreadyExists,
    RateLimited,
    NetworkUnavailable,
    ResourceCreationFailed,
    NoActiveSession,
    Unknown,
}

impl AuthErrorKind {
    pub const ALL: [AuthErrorKind; 8] = [
        Self::InvalidCredential,
        Self::PrincipalNotFound,
        Self::PrincipalAlreadyExists,
        Self::RateLimited,
        Self::NetworkUnavailable,
        Self::ResourceCreationFailed,
        Self::NoActiveSession,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "invalid_credential",
            Self::PrincipalNotFound => "principal_not_found",
            Self::PrincipalAlreadyExists => "principal_already_exists",
            Self::RateLimited => "rate_limited",
            Self::NetworkUnavailable => "network_unavailable",
            Self::ResourceCreationFailed => "resource_creation_failed",
            Self::NoActiveSession => "no_active_session",
            Self::Unknown => "unknown",
        }
    }

    /// Localized (pt-BR) message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "E-mail ou senha incorretos.",
            Self::PrincipalNotFound => "Nenhuma conta encontrada para este e-mail.",
            Self::PrincipalAlreadyExists => "Já existe uma conta cadastrada com este e-mail.",
            Self::RateLimited => "Muitas tentativas. Aguarde alguns minutos e tente novamente.",
            Self::NetworkUnavailable => {
                "Sem conexão com a internet. Verifique sua rede e tente novamente."
            }
            Self::ResourceCreationFailed => {
                "Sua conta foi criada, mas não foi possível cadastrar a propriedade. Tente novamente."
            }
            Self::NoActiveSession => "Sua sessão expirou. Entre novamente.",
            Self::Unknown => "Ocorreu um erro inesperado. Tente novamente.",
        }
    }
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
