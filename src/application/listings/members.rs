use crate::domain::QuerySpec;

/// Members of `group_id` with their display name and role, by user id.
pub fn of_group(group_id: i64) -> QuerySpec {
    QuerySpec::new(
        "SELECT `users`.`id`, `users`.`name`, `members`.`role` FROM `members` \
         JOIN `users` ON `users`.`id` = `members`.`user_id` \
         WHERE `members`.`group_id` = ?",
        "SELECT COUNT(`members`.`user_id`) AS `cnt` FROM `members` \
         JOIN `users` ON `users`.`id` = `members`.`user_id` \
         WHERE `members`.`group_id` = ?",
        "ORDER BY `users`.`id` ASC",
    )
    .bind_both([group_id])
}
