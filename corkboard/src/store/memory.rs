//! In-memory store backed by concurrent hash maps
//!
//! One `DashMap` per collection gives per-document atomicity: a write
//! replaces the whole value under its key, which is exactly the
//! consistency the `Store` contract promises and nothing more.

use super::Store;
use crate::error::Result;
use crate::types::{
    Activity, ActivityId, Assignment, AssignmentId, Board, BoardId, Card, CardId, List, ListId,
    OrgId, Organization, User, UserId,
};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-process implementation of [`Store`]
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    orgs: DashMap<OrgId, Organization>,
    boards: DashMap<BoardId, Board>,
    lists: DashMap<ListId, List>,
    cards: DashMap<CardId, Card>,
    assignments: DashMap<AssignmentId, Assignment>,
    activity: DashMap<ActivityId, Activity>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_id<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}

#[async_trait]
impl Store for MemoryStore {
    async fn read_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.users.get(id).map(|r| r.value().clone()))
    }

    async fn write_user(&self, user: &User) -> Result<()> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn read_org(&self, id: &OrgId) -> Result<Option<Organization>> {
        Ok(self.orgs.get(id).map(|r| r.value().clone()))
    }

    async fn write_org(&self, org: &Organization) -> Result<()> {
        self.orgs.insert(org.id.clone(), org.clone());
        Ok(())
    }

    async fn delete_org(&self, id: &OrgId) -> Result<()> {
        self.orgs.remove(id);
        Ok(())
    }

    async fn orgs_by_member(&self, user: &UserId) -> Result<Vec<Organization>> {
        let matches = self
            .orgs
            .iter()
            .filter(|entry| entry.is_member(user))
            .map(|entry| entry.value().clone())
            .collect();
        Ok(sorted_by_id(matches, |o| o.id.clone()))
    }

    async fn all_orgs(&self) -> Result<Vec<Organization>> {
        let all = self.orgs.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted_by_id(all, |o| o.id.clone()))
    }

    async fn read_board(&self, id: &BoardId) -> Result<Option<Board>> {
        Ok(self.boards.get(id).map(|r| r.value().clone()))
    }

    async fn write_board(&self, board: &Board) -> Result<()> {
        self.boards.insert(board.id.clone(), board.clone());
        Ok(())
    }

    async fn delete_board(&self, id: &BoardId) -> Result<()> {
        self.boards.remove(id);
        Ok(())
    }

    async fn boards_by_org(&self, org: &OrgId) -> Result<Vec<Board>> {
        let matches = self
            .boards
            .iter()
            .filter(|entry| entry.organization == *org)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(sorted_by_id(matches, |b| b.id.clone()))
    }

    async fn read_list(&self, id: &ListId) -> Result<Option<List>> {
        Ok(self.lists.get(id).map(|r| r.value().clone()))
    }

    async fn write_list(&self, list: &List) -> Result<()> {
        self.lists.insert(list.id.clone(), list.clone());
        Ok(())
    }

    async fn delete_list(&self, id: &ListId) -> Result<()> {
        self.lists.remove(id);
        Ok(())
    }

    async fn read_card(&self, id: &CardId) -> Result<Option<Card>> {
        Ok(self.cards.get(id).map(|r| r.value().clone()))
    }

    async fn write_card(&self, card: &Card) -> Result<()> {
        self.cards.insert(card.id.clone(), card.clone());
        Ok(())
    }

    async fn delete_card(&self, id: &CardId) -> Result<()> {
        self.cards.remove(id);
        Ok(())
    }

    async fn read_assignment(&self, id: &AssignmentId) -> Result<Option<Assignment>> {
        Ok(self.assignments.get(id).map(|r| r.value().clone()))
    }

    async fn write_assignment(&self, assignment: &Assignment) -> Result<()> {
        self.assignments
            .insert(assignment.id.clone(), assignment.clone());
        Ok(())
    }

    async fn delete_assignment(&self, id: &AssignmentId) -> Result<()> {
        self.assignments.remove(id);
        Ok(())
    }

    async fn assignments_by_user(&self, user: &UserId) -> Result<Vec<Assignment>> {
        let matches = self
            .assignments
            .iter()
            .filter(|entry| entry.user == *user)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(sorted_by_id(matches, |a| a.id.clone()))
    }

    async fn assignments_by_card(&self, card: &CardId) -> Result<Vec<Assignment>> {
        let matches = self
            .assignments
            .iter()
            .filter(|entry| entry.card == *card)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(sorted_by_id(matches, |a| a.id.clone()))
    }

    async fn write_activity(&self, activity: &Activity) -> Result<()> {
        self.activity.insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn read_activity(&self, id: &ActivityId) -> Result<Option<Activity>> {
        Ok(self.activity.get(id).map(|r| r.value().clone()))
    }

    async fn activity_by_org(&self, org: &OrgId) -> Result<Vec<Activity>> {
        let mut matches: Vec<Activity> = self
            .activity
            .iter()
            .filter(|entry| entry.organization == *org)
            .map(|entry| entry.value().clone())
            .collect();
        // Ids minted in the same millisecond do not sort; the timestamp
        // is the append order
        matches.sort_by_key(|a| (a.timestamp, a.id.clone()));
        Ok(matches)
    }

    async fn delete_activity_by_org(&self, org: &OrgId) -> Result<()> {
        self.activity.retain(|_, entry| entry.organization != *org);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_write_round_trip() {
        let store = MemoryStore::new();
        let board = Board::new("Sprint", "", OrgId::new());
        store.write_board(&board).await.unwrap();

        let loaded = store.read_board(&board.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Sprint");

        store.delete_board(&board.id).await.unwrap();
        assert!(store.read_board(&board.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_boards_by_org_is_scoped_and_stable() {
        let store = MemoryStore::new();
        let org = OrgId::new();
        let first = Board::new("First", "", org.clone());
        let second = Board::new("Second", "", org.clone());
        store.write_board(&second).await.unwrap();
        store.write_board(&first).await.unwrap();
        store.write_board(&Board::new("Other", "", OrgId::new())).await.unwrap();

        let boards = store.boards_by_org(&org).await.unwrap();
        assert_eq!(boards.len(), 2);
        let mut expected = vec![first.id.clone(), second.id.clone()];
        expected.sort();
        let ids: Vec<_> = boards.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, expected);

        // Same query twice returns the same sequence
        let again = store.boards_by_org(&org).await.unwrap();
        let again_ids: Vec<_> = again.iter().map(|b| b.id.clone()).collect();
        assert_eq!(again_ids, ids);
    }

    #[tokio::test]
    async fn test_delete_activity_by_org_is_scoped() {
        let store = MemoryStore::new();
        let org = OrgId::new();
        let other = OrgId::new();
        store
            .write_activity(&Activity::new(UserId::new(), org.clone(), None, "a"))
            .await
            .unwrap();
        store
            .write_activity(&Activity::new(UserId::new(), other.clone(), None, "b"))
            .await
            .unwrap();

        store.delete_activity_by_org(&org).await.unwrap();
        assert!(store.activity_by_org(&org).await.unwrap().is_empty());
        assert_eq!(store.activity_by_org(&other).await.unwrap().len(), 1);
    }
}
