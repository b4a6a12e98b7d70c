/// Where the interactive loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(u32), // Account number of the logged-in account
}

pub const EXIT_OPTION: &str = "0";

/// Menu text for the given state
pub fn render_menu(state: &SessionState) -> String {
    match state {
        SessionState::Authenticated(account_number) => format!(
            "\n\n================ MENU ================\n\
             Account: {}\n\
             1. Deposit\n\
             2. Withdraw\n\
             3. Statement\n\
             4. Reset access code\n\
             5. Logout\n\
             0. Exit\n\
             => ",
            account_number
        ),
        SessionState::Unauthenticated => "\n\n================ MENU ================\n\
             1. Create new user\n\
             2. Open new account\n\
             3. Login\n\
             4. List accounts\n\
             0. Exit\n\
             => "
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_variants() {
        let guest = render_menu(&SessionState::Unauthenticated);
        assert!(guest.contains("1. Create new user"));
        assert!(guest.contains("4. List accounts"));
        assert!(!guest.contains("Logout"));

        let member = render_menu(&SessionState::Authenticated(7));
        assert!(member.contains("Account: 7"));
        assert!(member.contains("5. Logout"));
        assert!(member.ends_with("=> "));
    }
}
