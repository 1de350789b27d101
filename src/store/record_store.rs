use std::collections::HashMap;

/// 插入序的题目集合：键（指纹或题目原文）→ 值
///
/// 键唯一；`difference` 按 `self` 的插入顺序输出，保证报告编号确定。
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
    /// 键的最小长度（字符数，严格大于才接受），过滤解析碎片
    min_key_len: usize,
}

impl<T> RecordStore<T> {
    pub fn new(min_key_len: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            min_key_len,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 仅当键不存在且长度足够时插入，返回是否发生了插入
    pub fn insert_if_new(&mut self, key: String, value: T) -> bool {
        if key.chars().count() <= self.min_key_len {
            return false;
        }
        if self.entries.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.entries.insert(key, value);
        true
    }

    /// 在 `self` 中但不在 `other` 中的值，按 `self` 的插入顺序
    pub fn difference<'a, U>(&'a self, other: &RecordStore<U>) -> Vec<&'a T> {
        self.order
            .iter()
            .filter(|key| !other.contains(key))
            .filter_map(|key| self.entries.get(key))
            .collect()
    }

    /// 按插入顺序遍历（键, 值）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|v| (key.as_str(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(keys: &[&str]) -> RecordStore<usize> {
        let mut store = RecordStore::new(5);
        for (i, key) in keys.iter().enumerate() {
            store.insert_if_new(key.to_string(), i);
        }
        store
    }

    #[test]
    fn insert_if_new_rejects_duplicates() {
        let mut store = RecordStore::new(5);
        assert!(store.insert_if_new("统战工作的性质".to_string(), 1));
        assert!(!store.insert_if_new("统战工作的性质".to_string(), 2));
        assert_eq!(store.len(), 1);
        // 先插入的值保留
        assert_eq!(store.iter().next().map(|(_, v)| *v), Some(1));
    }

    #[test]
    fn insert_if_new_rejects_short_keys() {
        let mut store: RecordStore<()> = RecordStore::new(5);
        assert!(!store.insert_if_new("甲乙丙丁戊".to_string(), ())); // 恰好 5 个字符，不足
        assert!(store.insert_if_new("甲乙丙丁戊己".to_string(), ())); // 6 个字符
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn difference_preserves_insertion_order() {
        let a = store_with(&["甲甲甲甲甲甲", "乙乙乙乙乙乙", "丙丙丙丙丙丙"]);
        let b = store_with(&["乙乙乙乙乙乙"]);
        let diff = a.difference(&b);
        assert_eq!(diff, vec![&0, &2]);
    }

    #[test]
    fn difference_with_self_is_empty() {
        let a = store_with(&["甲甲甲甲甲甲", "乙乙乙乙乙乙"]);
        assert!(a.difference(&a).is_empty());
    }

    #[test]
    fn symmetric_differences_are_disjoint() {
        let a = store_with(&["甲甲甲甲甲甲", "共共共共共共"]);
        let b = store_with(&["共共共共共共", "庚庚庚庚庚庚"]);
        let only_a = a.difference(&b);
        let only_b = b.difference(&a);
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_b.len(), 1);
        // 双向差集与交集合起来正好覆盖并集
        assert_eq!(only_a.len() + only_b.len() + 1, 3);
    }
}
