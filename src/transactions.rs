use std::{fs, marker::PhantomData, path::PathBuf};

/// Enum of possible operations to rollback
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}
/// Active Transaction
pub struct Active;
/// Committed Transaction
pub struct Committed;
/// A trait that tells us if rollback should occur when dropped.
pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}

/// Tracks every folder and file created while materializing a structure so a
/// failed run can undo itself.
///
/// A `Transaction<Active>` rolls its operations back in reverse order when it
/// is dropped; calling [`Transaction::commit`] finalizes it into a
/// `Transaction<Committed>` that does nothing on drop. Bailing out of
/// materialization with `?` therefore removes everything written so far.
pub struct Transaction<State: TransactionState> {
    rollback_operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}
impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
    /// Registers an action to reverse if the transaction is dropped without
    /// being committed.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.rollback_operations.push(operation);
    }
    /// Finalizes the transaction, preventing any rollback from occurring.
    pub fn commit(mut self) -> Transaction<Committed> {
        self.rollback_operations.clear();

        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
}
impl Default for Transaction<Active> {
    fn default() -> Self {
        Self::new()
    }
}
impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if S::SHOULD_ROLLBACK && !self.rollback_operations.is_empty() {
            log::debug!("rolling back operations");
            while let Some(operation) = self.rollback_operations.pop() {
                match operation {
                    RollbackOperation::RemoveDir(path) => {
                        log::debug!("removing dir: {}", path.display());
                        let _ = fs::remove_dir_all(&path);
                    }
                    RollbackOperation::RemoveFile(path) => {
                        log::debug!("removing file: {}", path.display());
                        let _ = fs::remove_file(&path);
                    }
                }
            }
        } else if !S::SHOULD_ROLLBACK {
            log::debug!("committing transaction");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_an_active_transaction_rolls_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("created.txt");
        std::fs::write(&file, "contents").expect("write");

        {
            let mut trx = Transaction::<Active>::new();
            trx.add_operation(RollbackOperation::RemoveFile(file.clone()));
        }

        assert!(!file.exists(), "uncommitted file should be removed");
    }

    #[test]
    fn committed_transactions_keep_their_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("created.txt");
        std::fs::write(&file, "contents").expect("write");

        let mut trx = Transaction::<Active>::new();
        trx.add_operation(RollbackOperation::RemoveFile(file.clone()));
        trx.commit();

        assert!(file.exists(), "committed file should survive");
    }
}
