//! Prompt construction for the extraction call.
//!
//! The instruction template is fixed and the builder is deterministic: the
//! same article text always produces the same message pair.

use crate::models::ChatMessage;

/// Domain framing for the system role.
pub const SYSTEM_PROMPT: &str = "Você é um assistente especializado em dados científicos.";

/// Fixed extraction instructions: three-column table, one row per author,
/// nothing invented, Portuguese title preferred, Markdown only.
pub const PROMPT_BASE: &str = "\
Você é a IA PANDA, especializada em extrair informações de artigos científicos.
Sua função é ler o texto de um artigo científico e devolver uma tabela com três colunas:
TÍTULO | AUTOR | E-MAIL

Regras:
- Cada linha da tabela deve conter o título do artigo (repetido se houver vários autores),
  o nome de um autor e o e-mail correspondente (ou em branco, se não houver).
- Nunca invente, complete ou interprete nomes ou e-mails.
- Se o título estiver em inglês e também houver uma versão em português, use o em português.
- A resposta deve ser sempre uma tabela legível em Markdown.";

/// Build the user message: instructions plus the article text.
#[must_use]
pub fn build_user_prompt(article_text: &str) -> String {
    format!(
        "{PROMPT_BASE}\n\nTexto do artigo:\n'''{article_text}'''\n\nResponda somente com a tabela."
    )
}

/// Build the system + user message pair for one article.
#[must_use]
pub fn build_messages(article_text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(build_user_prompt(article_text))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_user_prompt_wraps_article_text() {
        let prompt = build_user_prompt("conteudo do artigo");
        assert!(prompt.contains("'''conteudo do artigo'''"));
        assert!(prompt.starts_with(PROMPT_BASE));
        assert!(prompt.ends_with("Responda somente com a tabela."));
    }

    #[test]
    fn test_instructions_forbid_fabrication() {
        assert!(PROMPT_BASE.contains("Nunca invente"));
        assert!(PROMPT_BASE.contains("TÍTULO | AUTOR | E-MAIL"));
        assert!(PROMPT_BASE.contains("use o em português"));
    }

    #[test]
    fn test_messages_carry_system_then_user() {
        let messages = build_messages("texto");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_builder_is_deterministic() {
        let first = build_messages("mesmo texto");
        let second = build_messages("mesmo texto");
        assert_eq!(first[1].content, second[1].content);
    }
}
