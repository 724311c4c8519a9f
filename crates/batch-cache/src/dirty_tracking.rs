//! 髒標記追蹤

use std::collections::HashSet;

/// 髒標記追蹤器（記錄需要重新展開的訂單）
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty_orders: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記訂單為髒
    pub fn mark_dirty(&mut self, order_id: String) {
        self.dirty_orders.insert(order_id);
    }

    /// 檢查訂單是否為髒
    pub fn is_dirty(&self, order_id: &str) -> bool {
        self.dirty_orders.contains(order_id)
    }

    /// 清除單張訂單的髒標記，回傳原本是否為髒
    pub fn clear_order(&mut self, order_id: &str) -> bool {
        self.dirty_orders.remove(order_id)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_orders.clear();
    }

    pub fn len(&self) -> usize {
        self.dirty_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirty_orders.is_empty()
    }
}
