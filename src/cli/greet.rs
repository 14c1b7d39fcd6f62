//! Greeter command

/// Greeting for a name; a blank name greets the world
pub fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Hello, World!".to_string()
    } else {
        format!("Hello, {}!", name)
    }
}

pub fn handle_greet_command(name: Option<String>) {
    println!("{}", greeting(name.as_deref().unwrap_or_default()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("Ada"), "Hello, Ada!");
        assert_eq!(greeting("  Grace "), "Hello, Grace!");
        assert_eq!(greeting(""), "Hello, World!");
        assert_eq!(greeting("   "), "Hello, World!");
    }
}
