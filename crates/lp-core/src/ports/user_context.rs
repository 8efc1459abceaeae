/// Identity the hosting page injected for the signed-in user.
pub trait UserContextPort: Send + Sync {
    fn current_user_id(&self) -> Option<String>;
}
