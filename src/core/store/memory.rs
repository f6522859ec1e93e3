//! In-memory student store

use super::{prepare_for_write, StoreError, StudentStore};
use crate::core::models::{normalize_register_no, Student};
use crate::debug;

/// Student store backed by a `Vec`, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    students: Vec<Student>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.students.iter().position(|s| s.register_no == key)
    }
}

impl StudentStore for MemoryStore {
    fn find_by_key(&self, register_no: &str) -> Result<Option<Student>, StoreError> {
        let key = normalize_register_no(register_no);
        Ok(self.position(&key).map(|idx| self.students[idx].clone()))
    }

    fn insert(&mut self, student: Student) -> Result<Student, StoreError> {
        let student = prepare_for_write(student)?;
        if self.position(&student.register_no).is_some() {
            return Err(StoreError::Conflict(student.register_no));
        }
        debug!("Inserted {} into memory store", student.register_no);
        self.students.push(student.clone());
        Ok(student)
    }

    fn upsert(&mut self, student: Student) -> Result<Student, StoreError> {
        let student = prepare_for_write(student)?;
        match self.position(&student.register_no) {
            Some(idx) => self.students[idx] = student.clone(),
            None => self.students.push(student.clone()),
        }
        debug!("Upserted {} into memory store", student.register_no);
        Ok(student)
    }

    fn delete(&mut self, register_no: &str) -> Result<Option<Student>, StoreError> {
        let key = normalize_register_no(register_no);
        Ok(self.position(&key).map(|idx| self.students.remove(idx)))
    }

    fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.students.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(register_no: &str) -> Student {
        Student::new("Nila".to_string(), register_no, "C".to_string(), 1)
    }

    #[test]
    fn test_insert_conflict_on_normalized_key() {
        let mut store = MemoryStore::new();
        store.insert(student("ec1")).unwrap();

        let err = store.insert(student(" EC1 ")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(key) if key == "EC1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = MemoryStore::new();
        store.upsert(student("A1")).unwrap();
        store.upsert(student("A2")).unwrap();

        let mut renamed = student("a1");
        renamed.name = "Nila R".to_string();
        store.upsert(renamed).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].register_no, "A1");
        assert_eq!(all[0].name, "Nila R");
    }

    #[test]
    fn test_delete_and_get() {
        let mut store = MemoryStore::new();
        store.insert(student("A1")).unwrap();

        assert!(store.get("a1").is_ok());
        assert!(store.delete("a1").unwrap().is_some());
        assert!(store.delete("a1").unwrap().is_none());
        assert!(matches!(store.get("A1"), Err(StoreError::NotFound(_))));
        assert!(store.is_empty());
    }
}
