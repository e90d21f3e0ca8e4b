pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

pub const CONFIG_FILE_ENV: &str = "COACH_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "./config.json";
pub const PROVIDER_ENV: &str = "COACH_PROVIDER";
pub const HOST_ENV: &str = "COACH_HOST";
pub const PORT_ENV: &str = "COACH_PORT";

pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const CLAUDE_DEFAULT_MODEL: &str = "claude-sonnet-4-5";
pub const CLAUDE_DEFAULT_URL: &str = "https://api.anthropic.com/v1";
pub const CLAUDE_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const CLAUDE_API_VERSION: &str = "2023-06-01";

pub const DEFAULT_MAX_TOKENS: u32 = 4096;

pub const PROMPT_HEADER: &str = "Você é um coach de estudos especializado em";

pub const PROMPT_INSTRUCTIONS: &str = "\
Responda com foco em explicar da melhor maneira, corrigir erros teóricos e práticos e ser objetivo:
- Dê a solução direta (código/comando/algoritmo se aplicável).
- Explique linha a linha ou etapa a etapa.
- Destaque a alternativa correta (se houver alternativas) e explique por que as outras estão erradas.
- Aponte erros comuns e como evitá-los.
- Liste formulações de questões semelhantes para praticar.
- Use exemplos práticos quando possível.
- Mantenha a resposta organizada com tópicos e subtópicos.";

pub const PROMPT_CONTEXT_LABEL: &str = "Contexto adicional:";
pub const PROMPT_QUESTION_LABEL: &str = "Pergunta do aluno:";
