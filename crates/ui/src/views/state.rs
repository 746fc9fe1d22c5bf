/// User-facing failures. Each maps to one fixed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoadReadings,
    MarkReading,
    LoadCatechism,
    /// The server has no catechism loaded. Informational, not a failure of the request.
    CatechismNotProvisioned,
    MarkCatechism,
    LoadProgress,
    MissingCredentials,
    InvalidCredentials,
    UserExists,
    SignIn,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::LoadReadings => "Erro ao carregar leituras do dia",
            Self::MarkReading => "Erro ao marcar leitura como concluída",
            Self::LoadCatechism => "Erro ao carregar o catecismo",
            Self::CatechismNotProvisioned => {
                "O catecismo ainda não foi cadastrado. Tente novamente mais tarde."
            }
            Self::MarkCatechism => "Erro ao marcar pergunta como concluída",
            Self::LoadProgress => "Erro ao carregar progresso",
            Self::MissingCredentials => "Email e senha são obrigatórios",
            Self::InvalidCredentials => "Credenciais inválidas",
            Self::UserExists => "Usuário já existe",
            Self::SignIn => "Erro ao entrar",
        }
    }

    #[must_use]
    pub fn is_informational(self) -> bool {
        matches!(self, Self::CatechismNotProvisioned)
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        if self.is_informational() {
            "info-message"
        } else {
            "error-message"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
