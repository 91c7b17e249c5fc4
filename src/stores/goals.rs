use uuid::Uuid;

use crate::error::JournalError;
use crate::metrics::{calculate_net_pnl, calculate_win_rate};
use crate::models::{CreateGoalInput, Goal, GoalType, GoalUpdate, Trade};
use crate::storage::{keys, StorageHandle};

/// Trading targets with auto-computed progress. `completed` is an
/// invariant, not a flag: every mutation re-derives it from
/// `current >= target`.
pub struct GoalsStore {
    storage: StorageHandle,
    goals: Vec<Goal>,
}

impl GoalsStore {
    pub fn load(storage: StorageHandle) -> Result<Self, JournalError> {
        let goals: Vec<Goal> = storage.read_collection(keys::GOALS);
        Ok(Self { storage, goals })
    }

    pub fn add_goal(&mut self, input: CreateGoalInput) -> Result<Goal, JournalError> {
        let current = input.current.unwrap_or(0.0);
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            goal_type: input.goal_type,
            target: input.target,
            current,
            deadline: input.deadline,
            completed: current >= input.target,
        };
        self.goals.push(goal.clone());
        self.save()?;
        Ok(goal)
    }

    pub fn update_goal(&mut self, id: &str, patch: GoalUpdate) -> Result<Option<Goal>, JournalError> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            goal.title = title;
        }
        if let Some(goal_type) = patch.goal_type {
            goal.goal_type = goal_type;
        }
        if let Some(target) = patch.target {
            goal.target = target;
        }
        if let Some(current) = patch.current {
            goal.current = current;
        }
        if let Some(deadline) = patch.deadline {
            goal.deadline = deadline;
        }
        goal.completed = goal.current >= goal.target;

        let updated = goal.clone();
        self.save()?;
        Ok(Some(updated))
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.goals.iter().position(|g| g.id == id) else {
            return Ok(false);
        };
        self.goals.remove(index);
        self.save()?;
        Ok(true)
    }

    pub fn update_goal_progress(&mut self, id: &str, current: f64) -> Result<bool, JournalError> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Ok(false);
        };
        goal.current = current;
        goal.completed = goal.current >= goal.target;
        self.save()?;
        Ok(true)
    }

    /// Resync every goal's progress from the given trades (the selected
    /// account's, typically). Invoked by the caller after trade
    /// mutations; only goals whose derived value actually changed are
    /// written. Returns how many were touched.
    pub fn recompute_goals(&mut self, trades: &[Trade]) -> Result<usize, JournalError> {
        let mut changed = 0;
        for goal in &mut self.goals {
            let value = match goal.goal_type {
                GoalType::Profit => calculate_net_pnl(trades),
                GoalType::Winrate => calculate_win_rate(trades),
                GoalType::Trades => trades.len() as f64,
            };
            if value != goal.current {
                goal.current = value;
                goal.completed = goal.current >= goal.target;
                changed += 1;
            }
        }

        if changed > 0 {
            self.save()?;
        }
        Ok(changed)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn active_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| !g.completed).collect()
    }

    pub fn completed_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.completed).collect()
    }

    fn save(&self) -> Result<(), JournalError> {
        self.storage.write_collection(keys::GOALS, &self.goals)
    }
}
