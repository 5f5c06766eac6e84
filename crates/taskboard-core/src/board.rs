//! Task board domain model
//!
//! A [`Board`] is an ordered, fixed set of [`Category`] values, each owning an
//! ordered list of [`Task`]s. Every transition takes `&self` and returns a new
//! board. Only the touched category receives a new task list; the others keep
//! sharing theirs, so callers can detect what changed with
//! [`Category::shares_tasks_with`].

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Categories a board starts with when none are configured
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Education", "Work", "Shopping"];

/// Unique task identifier, valid for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`TaskId`]s
///
/// Ids are never reused, even after the task holding one is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id the next call to [`IdGenerator::next_id`] returns
    pub fn peek(&self) -> TaskId {
        TaskId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Name of the category holding this task
    pub category: String,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            category: category.into(),
        }
    }
}

/// A named, ordered group of tasks
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    tasks: Arc<[Task]>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Arc::from(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Exact text match, no trimming or case folding
    pub fn contains_text(&self, text: &str) -> bool {
        self.tasks.iter().any(|task| task.text == text)
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// True when both categories point at the same task list allocation,
    /// i.e. no transition replaced it in between.
    pub fn shares_tasks_with(&self, other: &Category) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            name: self.name.clone(),
            tasks: Arc::from(tasks),
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.tasks == other.tasks
    }
}

impl Eq for Category {}

/// The full set of categories and their tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Create an empty board with the given categories, in order
    ///
    /// Repeated names are collapsed onto their first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let name = name.into();
            if categories.iter().any(|c| c.name == name) {
                tracing::warn!("Ignoring repeated category name: {}", name);
                continue;
            }
            categories.push(Category::new(name));
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Categories holding at least one task, in board order
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_empty())
    }

    pub fn find_task(&self, category: &str, id: TaskId) -> Option<&Task> {
        self.category(category).and_then(|c| c.find(id))
    }

    /// Like [`Board::find_task`], failing with [`Error::TaskNotFound`]
    pub fn task(&self, category: &str, id: TaskId) -> Result<&Task> {
        self.find_task(category, id)
            .ok_or_else(|| Error::task_not_found(category, id))
    }

    /// Total number of tasks across all categories
    pub fn task_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Category::is_empty)
    }

    /// Append a task to the end of `category`
    ///
    /// Fails with [`Error::DuplicateTask`] when the category already holds a
    /// task with exactly this text, and with [`Error::CategoryNotFound`] when
    /// the board has no such category.
    pub fn with_task_added(&self, category: &str, text: &str, id: TaskId) -> Result<Board> {
        let target = self
            .category(category)
            .ok_or_else(|| Error::category_not_found(category))?;

        if target.contains_text(text) {
            return Err(Error::duplicate_task(category, text));
        }

        let mut tasks = target.tasks().to_vec();
        tasks.push(Task::new(id, text, category));
        Ok(self.replace_category(category, tasks))
    }

    /// Remove the task with `id` from `category`
    ///
    /// Returns an unchanged board (sharing every task list) when there is no
    /// such task.
    pub fn without_task(&self, category: &str, id: TaskId) -> Board {
        match self.category(category) {
            Some(target) if target.find(id).is_some() => {
                let tasks = target
                    .tasks()
                    .iter()
                    .filter(|task| task.id != id)
                    .cloned()
                    .collect();
                self.replace_category(category, tasks)
            }
            _ => self.clone(),
        }
    }

    /// Replace the text of the task with `id` in `category`
    ///
    /// The text is stored as given. Returns an unchanged board when there is
    /// no such task.
    pub fn with_task_text(&self, category: &str, id: TaskId, text: &str) -> Board {
        match self.category(category) {
            Some(target) if target.find(id).is_some() => {
                let tasks = target
                    .tasks()
                    .iter()
                    .map(|task| {
                        if task.id == id {
                            Task {
                                text: text.to_string(),
                                ..task.clone()
                            }
                        } else {
                            task.clone()
                        }
                    })
                    .collect();
                self.replace_category(category, tasks)
            }
            _ => self.clone(),
        }
    }

    fn replace_category(&self, name: &str, tasks: Vec<Task>) -> Board {
        let categories = self
            .categories
            .iter()
            .map(|c| {
                if c.name == name {
                    c.with_tasks(tasks.clone())
                } else {
                    c.clone()
                }
            })
            .collect();
        Board { categories }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}
