use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::utils::currency::format_currency;

const NO_MOVEMENTS: &str = "No movements were made.";

/// Append-only log of formatted transaction lines
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Statement(Vec<String>);

impl Statement {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Copy of this statement with one more line at the end
    pub fn with_line(&self, line: String) -> Self {
        let mut lines = self.0.clone();
        lines.push(line);
        Self(lines)
    }
}

/// Render the statement block shown to the account holder
pub fn render_statement(balance: Decimal, statement: &Statement) -> String {
    let body = if statement.is_empty() {
        NO_MOVEMENTS.to_string()
    } else {
        statement.lines().join("\n")
    };

    format!(
        "\n================ STATEMENT ================\n{}\n\nBalance:\t{}\n===========================================",
        body,
        format_currency(balance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statement_placeholder() {
        let text = render_statement(Decimal::from(500), &Statement::new());
        assert!(text.contains(NO_MOVEMENTS));
        assert!(text.contains("Balance:\tR$ 500,00"));
    }

    #[test]
    fn test_statement_lines_in_order() {
        let statement = Statement::new()
            .with_line("Deposit:\tR$ 100,00".to_string())
            .with_line("Withdrawal:\tR$ 50,00".to_string());
        let text = render_statement(Decimal::from(1550), &statement);

        let deposit = text.find("Deposit:").unwrap();
        let withdrawal = text.find("Withdrawal:").unwrap();
        assert!(deposit < withdrawal);
        assert!(!text.contains(NO_MOVEMENTS));
        assert!(text.contains("R$ 1.550,00"));
    }

    #[test]
    fn test_with_line_leaves_original_untouched() {
        let original = Statement::new();
        let extended = original.with_line("Deposit:\tR$ 1,00".to_string());
        assert!(original.is_empty());
        assert_eq!(extended.len(), 1);
    }
}
