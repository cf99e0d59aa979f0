use crate::domain::models::TaskCredentials;

/// Port for looking up task credentials
///
/// The store owns the credentials lifecycle; the endpoint only reads
/// snapshots.
///
/// # Examples
///
/// ```no_run
/// use task_credentials::domain::ports::CredentialsStore;
///
/// fn has_credentials(store: &dyn CredentialsStore, id: &str) -> bool {
///     store.task_credentials(id).is_some()
/// }
/// ```
pub trait CredentialsStore: Send + Sync {
    /// Return a snapshot of the credentials registered under `id`, or `None`
    /// if the identifier is unknown
    fn task_credentials(&self, id: &str) -> Option<TaskCredentials>;
}
