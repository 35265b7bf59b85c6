#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskboard::db::categories::Categories;
    use taskboard::db::db::Db;
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::task::{NewTask, Status};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StatsTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StatsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskboard.db");
            Db::open(&db_path).unwrap().init().unwrap();
            StatsTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn insert_with_status(tasks: &mut Tasks, title: &str, status: Status) {
        let new_task = NewTask {
            title: title.to_string(),
            status: Some(status),
            ..NewTask::default()
        };
        tasks.insert(&new_task).unwrap();
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_status_counts(ctx: &mut StatsTestContext) {
        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        insert_with_status(&mut tasks, "P1", Status::Pending);
        insert_with_status(&mut tasks, "P2", Status::Pending);
        insert_with_status(&mut tasks, "W1", Status::InProgress);
        insert_with_status(&mut tasks, "C1", Status::Completed);

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_empty_store_counts(ctx: &mut StatsTestContext) {
        let mut tasks = Tasks::open(&ctx.db_path).unwrap();

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.completed, 0);
        // Seeded categories still show up, each with zero tasks.
        assert_eq!(stats.categories.len(), 5);
        assert!(stats.categories.iter().all(|c| c.count == 0));
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_category_breakdown_includes_empty(ctx: &mut StatsTestContext) {
        let mut categories = Categories::open(&ctx.db_path).unwrap();
        let work_id = categories
            .list()
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Work")
            .unwrap()
            .id
            .unwrap();

        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        for title in ["Standup", "Review"] {
            let new_task = NewTask {
                title: title.to_string(),
                category_id: Some(work_id),
                ..NewTask::default()
            };
            tasks.insert(&new_task).unwrap();
        }
        // One task with no category at all; it has no breakdown row.
        tasks.insert(&NewTask::new("Loose end")).unwrap();

        let stats = tasks.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.categories.len(), 5);

        let work = stats.categories.iter().find(|c| c.name == "Work").unwrap();
        assert_eq!(work.count, 2);
        let personal = stats.categories.iter().find(|c| c.name == "Personal").unwrap();
        assert_eq!(personal.count, 0);
    }
}
