/// Strips unsafe markup from user supplied text before it reaches storage.
pub fn clean_text(text: &str) -> String {
    ammonia::clean(text)
}
