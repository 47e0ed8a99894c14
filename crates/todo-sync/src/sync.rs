//! Todo Sync Coordinator
//!
//! Every user intent goes through here: mark pending ids, call the remote
//! store, then reconcile the collection or raise a notification. The list is
//! only changed after the server confirms; pending ids are released on every
//! path so no loader overlay gets stuck.

use futures::future::join_all;

use crate::error::{ApiError, Failure};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch, UserId};
use crate::notification::Ticket;
use crate::remote::TodoRemote;
use crate::state::ListHandle;

#[derive(Debug, Clone, Copy)]
pub struct TodoSync<R, H> {
    remote: R,
    state: H,
    user_id: UserId,
}

impl<R, H> TodoSync<R, H>
where
    R: TodoRemote,
    H: ListHandle,
{
    pub fn new(remote: R, state: H, user_id: UserId) -> Self {
        Self { remote, state, user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Fetch the user's todos and replace the collection
    pub async fn load(&self) {
        self.state.update(|list| {
            list.notification.dismiss();
            list.loading = true;
        });

        let result = self.remote.list(self.user_id).await;

        self.state.update(|list| {
            match result {
                Ok(todos) => {
                    log::info!("[SYNC] Loaded {} todos for user {}", todos.len(), self.user_id);
                    list.todos = todos;
                }
                Err(e) => {
                    log::error!("[SYNC] Load failed: {}", e);
                    list.notify(Failure::LoadTodos);
                }
            }
            list.loading = false;
        });
    }

    /// Create a todo from `title`.
    ///
    /// `Ok` means the caller may clear its input; on `Err` the typed title
    /// should be kept for another attempt.
    pub async fn create_one(&self, title: &str) -> Result<Todo, Failure> {
        let title = title.trim();
        if title.is_empty() {
            self.state.update(|list| list.notify(Failure::EmptyTitle));
            return Err(Failure::EmptyTitle);
        }

        self.state.update(|list| list.draft = Some(Todo::draft(self.user_id, title)));

        let result = self.remote.create(&NewTodo::new(self.user_id, title)).await;

        self.state.update(|list| {
            list.draft = None;
            match result {
                Ok(todo) => {
                    log::info!("[SYNC] Created todo {}", todo.id);
                    list.todos.push(todo.clone());
                    Ok(todo)
                }
                Err(e) => {
                    log::error!("[SYNC] Create failed: {}", e);
                    list.notify(Failure::AddTodo);
                    Err(Failure::AddTodo)
                }
            }
        })
    }

    /// Flip `completed` of one todo
    pub async fn toggle_one(&self, id: TodoId) {
        let Some(completed) = self.state.update(|list| {
            let completed = list.get(id)?.completed;
            list.pending.mark(id);
            Some(completed)
        }) else {
            log::warn!("[SYNC] Toggle of unknown todo {}", id);
            return;
        };

        let result = self.remote.update(id, &TodoPatch::completed(!completed)).await;

        self.state.update(|list| {
            match result {
                Ok(todo) => list.replace(todo),
                Err(e) => {
                    log::error!("[SYNC] Toggle of {} failed: {}", id, e);
                    list.notify(Failure::UpdateTodo);
                }
            }
            list.pending.release(id);
        });
    }

    /// Complete every active todo, or reactivate all when none is active.
    /// Applied only if every update succeeds.
    pub async fn toggle_all(&self) {
        let Some((target, ids)) = self.state.update(|list| {
            let plan = list.toggle_all_plan();
            if let Some((_, ids)) = &plan {
                list.pending.mark_all(ids);
            }
            plan
        }) else {
            return;
        };

        let patch = TodoPatch::completed(target);
        let results = join_all(ids.iter().map(|&id| self.remote.update(id, &patch))).await;
        let outcome = first_error(results);

        self.state.update(|list| {
            match outcome {
                Ok(()) => {
                    log::info!("[SYNC] Set completed={} on {} todos", target, ids.len());
                    list.set_completed(&ids, target);
                }
                Err(e) => {
                    log::error!("[SYNC] Toggle all failed: {}", e);
                    list.notify(Failure::UpdateTodo);
                }
            }
            list.pending.release_all(&ids);
        });
    }

    /// Save an edited title.
    ///
    /// An unchanged title costs no request and a blank one deletes the todo.
    /// `Err` means the editor should stay open.
    pub async fn rename_one(&self, id: TodoId, title: &str) -> Result<(), Failure> {
        let title = title.trim();
        let Some(current) = self.state.update(|list| list.get(id).map(|todo| todo.title.clone())) else {
            log::warn!("[SYNC] Rename of unknown todo {}", id);
            return Ok(());
        };

        if title == current {
            return Ok(());
        }
        if title.is_empty() {
            return self.delete_one(id).await;
        }

        self.state.update(|list| list.pending.mark(id));

        let result = self.remote.update(id, &TodoPatch::title(title)).await;

        self.state.update(|list| {
            let outcome = match result {
                Ok(todo) => {
                    list.replace(todo);
                    Ok(())
                }
                Err(e) => {
                    log::error!("[SYNC] Rename of {} failed: {}", id, e);
                    list.notify(Failure::UpdateTodo);
                    Err(Failure::UpdateTodo)
                }
            };
            list.pending.release(id);
            outcome
        })
    }

    pub async fn delete_one(&self, id: TodoId) -> Result<(), Failure> {
        self.state.update(|list| list.pending.mark(id));

        let result = self.remote.delete(id).await;

        self.state.update(|list| {
            let outcome = match result {
                Ok(()) => {
                    log::info!("[SYNC] Deleted todo {}", id);
                    list.remove(id);
                    Ok(())
                }
                Err(e) => {
                    log::error!("[SYNC] Delete of {} failed: {}", id, e);
                    list.notify(Failure::DeleteTodo);
                    Err(Failure::DeleteTodo)
                }
            };
            list.pending.release(id);
            outcome
        })
    }

    /// Delete every completed todo. Applied only if every delete succeeds.
    pub async fn clear_completed(&self) {
        let ids = self.state.update(|list| {
            let ids = list.completed_ids();
            list.pending.mark_all(&ids);
            ids
        });
        if ids.is_empty() {
            return;
        }

        let results = join_all(ids.iter().map(|&id| self.remote.delete(id))).await;
        let outcome = first_error(results);

        self.state.update(|list| {
            match outcome {
                Ok(()) => {
                    log::info!("[SYNC] Cleared {} completed todos", ids.len());
                    list.remove_all(&ids);
                }
                Err(e) => {
                    log::error!("[SYNC] Clear completed failed: {}", e);
                    list.notify(Failure::DeleteTodo);
                }
            }
            list.pending.release_all(&ids);
        });
    }

    pub fn dismiss_notification(&self) {
        self.state.update(|list| list.notification.dismiss());
    }

    /// Called by the auto-dismiss timer started for `ticket`
    pub fn expire_notification(&self, ticket: Ticket) {
        self.state.update(|list| list.notification.expire(ticket));
    }
}

/// Collapse a joined batch into its first error, if any
fn first_error<T>(results: Vec<Result<T, ApiError>>) -> Result<(), ApiError> {
    results.into_iter().try_for_each(|r| r.map(|_| ()))
}
