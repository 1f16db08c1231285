/// Key-value preference storage (browser `localStorage` on the web).
///
/// Reads and writes are best-effort: an unavailable store reads as empty and
/// silently drops writes.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}
