//! Group lists shown on a user's home screen.

use crate::domain::QuerySpec;

/// Enabled groups `user_id` belongs to, with the user's role; newest first.
pub fn joined_by(user_id: i64) -> QuerySpec {
    QuerySpec::new(
        "SELECT `g`.`id`, `g`.`name`, `g`.`creator_id`, `g`.`created_at`, `m`.`role` \
         FROM `groups` `g` \
         JOIN `members` `m` ON `g`.`id` = `m`.`group_id` \
         WHERE `g`.`is_enabled` = 1 AND `m`.`user_id` = ?",
        "SELECT COUNT(`g`.`id`) AS `cnt` \
         FROM `groups` `g` \
         JOIN `members` `m` ON `g`.`id` = `m`.`group_id` \
         WHERE `g`.`is_enabled` = 1 AND `m`.`user_id` = ?",
        "ORDER BY `g`.`id` DESC",
    )
    .bind_both([user_id])
}

/// Enabled groups accepting registrations that `user_id` has not joined;
/// newest first.
pub fn open_for_signup(user_id: i64) -> QuerySpec {
    QuerySpec::new(
        "SELECT `g`.`id`, `g`.`name`, `g`.`created_at` \
         FROM `groups` `g` \
         WHERE `g`.`is_enabled` = 1 AND `g`.`allow_register` = 1 \
         AND NOT EXISTS (SELECT 1 FROM `members` `m` WHERE `m`.`user_id` = ? AND `m`.`group_id` = `g`.`id`)",
        "SELECT COUNT(`g`.`id`) AS `cnt` \
         FROM `groups` `g` \
         WHERE `g`.`is_enabled` = 1 AND `g`.`allow_register` = 1 \
         AND NOT EXISTS (SELECT 1 FROM `members` `m` WHERE `m`.`user_id` = ? AND `m`.`group_id` = `g`.`id`)",
        "ORDER BY `g`.`id` DESC",
    )
    .bind_both([user_id])
}
