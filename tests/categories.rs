#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskboard::db::categories::{Categories, DEFAULT_CATEGORY_COLOR};
    use taskboard::db::db::Db;
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskboard.db");
            Db::open(&db_path).unwrap().init().unwrap();
            CategoryTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_crud(ctx: &mut CategoryTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();

        let id = categories.create("Errands", Some("#123456")).unwrap().unwrap();
        assert!(id > 0);

        let fetched = categories.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Errands");
        assert_eq!(fetched.color, "#123456");
        assert!(fetched.created_at.is_some());

        assert!(categories.update(id, "Chores", "#654321").unwrap());
        let updated = categories.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.name, "Chores");
        assert_eq!(updated.color, "#654321");

        assert!(categories.delete(id).unwrap());
        assert!(categories.get_by_id(id).unwrap().is_none());
        assert!(!categories.delete(id).unwrap());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_create_applies_default_color(ctx: &mut CategoryTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();

        let id = categories.create("Reading", None).unwrap().unwrap();
        let category = categories.get_by_id(id).unwrap().unwrap();
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_duplicate_name_returns_conflict_sentinel(ctx: &mut CategoryTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();
        let count_before = categories.list().unwrap().len();

        // "Work" is part of the seeded defaults.
        assert!(categories.create("Work", Some("#000000")).unwrap().is_none());
        assert_eq!(categories.list().unwrap().len(), count_before);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_list_ordered_by_id(ctx: &mut CategoryTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();
        categories.create("Zeta", None).unwrap().unwrap();
        categories.create("Alpha", None).unwrap().unwrap();

        let all = categories.list().unwrap();
        let ids: Vec<i64> = all.iter().map(|c| c.id.unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_nulls_task_references(ctx: &mut CategoryTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();
        let category_id = categories.create("Doomed", None).unwrap().unwrap();

        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        let mut task_ids = Vec::new();
        for title in ["A", "B", "C"] {
            let new_task = NewTask {
                title: title.to_string(),
                category_id: Some(category_id),
                ..NewTask::default()
            };
            task_ids.push(tasks.insert(&new_task).unwrap());
        }

        assert!(categories.delete(category_id).unwrap());

        assert!(categories.list().unwrap().iter().all(|c| c.id != Some(category_id)));
        for task_id in task_ids {
            let task = tasks.get_by_id(task_id).unwrap().unwrap();
            assert_eq!(task.category_id, None);
            assert_eq!(task.category_name, None);
        }
    }
}
