use crate::domain::QuerySpec;

/// `orders.status` of an order nobody has approved yet.
pub const STATUS_PENDING: i32 = 0;

/// Which orders of a group to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    /// Every order, newest first
    #[default]
    All,
    /// Pending orders in queue order (oldest first)
    PendingOnly,
}

impl OrderFilter {
    /// Query-string flag (`show_only_pending`): any non-zero integer means
    /// pending only.
    pub fn from_flag(raw: Option<&str>) -> Self {
        match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(flag) if flag != 0 => Self::PendingOnly,
            _ => Self::All,
        }
    }
}

const ORDER_COLUMNS: &str = "SELECT `orders`.`id`, `orders`.`user_id`, `users`.`name`, \
     `orders`.`table_id`, `orders`.`total_price`, `orders`.`status`, `orders`.`created_at` \
     FROM `orders` \
     JOIN `users` ON `users`.`id` = `orders`.`user_id`";

/// Orders placed in `group_id`, joined with the ordering user's name.
pub fn of_group(group_id: i64, filter: OrderFilter) -> QuerySpec {
    match filter {
        OrderFilter::All => QuerySpec::new(
            format!("{} WHERE `orders`.`group_id` = ?", ORDER_COLUMNS),
            "SELECT COUNT(`orders`.`id`) AS `cnt` FROM `orders` \
             WHERE `orders`.`group_id` = ?",
            "ORDER BY `orders`.`id` DESC",
        )
        .bind_both([group_id]),
        OrderFilter::PendingOnly => QuerySpec::new(
            format!(
                "{} WHERE `orders`.`group_id` = ? AND `orders`.`status` = ?",
                ORDER_COLUMNS
            ),
            "SELECT COUNT(`orders`.`id`) AS `cnt` FROM `orders` \
             WHERE `orders`.`group_id` = ? AND `orders`.`status` = ?",
            "ORDER BY `orders`.`id` ASC",
        )
        .bind_both([group_id, i64::from(STATUS_PENDING)]),
    }
}
