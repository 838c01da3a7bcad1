#[cfg(test)]
mod tests {
    use quickadd::libs::id;

    const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_generated_ids_have_default_length() {
        assert_eq!(id::generate().chars().count(), 21);
    }

    #[test]
    fn test_generated_ids_use_the_alphanumeric_alphabet() {
        let generated = id::generate();
        assert!(generated.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(id::generate(), id::generate());
    }

    #[test]
    fn test_custom_size() {
        assert_eq!(id::generate_sized(10).chars().count(), 10);
        assert_eq!(id::generate_sized(0), "");
    }
}
