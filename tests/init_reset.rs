#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskboard::db::categories::Categories;
    use taskboard::db::db::{Db, DEFAULT_CATEGORIES};
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct InitTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for InitTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskboard.db");
            InitTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_seeds_defaults(ctx: &mut InitTestContext) {
        Db::open(&ctx.db_path).unwrap().init().unwrap();

        let all = Categories::open(&ctx.db_path).unwrap().list().unwrap();
        assert_eq!(all.len(), DEFAULT_CATEGORIES.len());
        for ((name, color), category) in DEFAULT_CATEGORIES.iter().zip(&all) {
            assert_eq!(&category.name, name);
            assert_eq!(&category.color, color);
        }
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_twice_is_idempotent(ctx: &mut InitTestContext) {
        Db::open(&ctx.db_path).unwrap().init().unwrap();
        Db::open(&ctx.db_path).unwrap().init().unwrap();

        let all = Categories::open(&ctx.db_path).unwrap().list().unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_init_preserves_existing_data(ctx: &mut InitTestContext) {
        Db::open(&ctx.db_path).unwrap().init().unwrap();

        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        tasks.insert(&NewTask::new("Keep me")).unwrap();
        let mut categories = Categories::open(&ctx.db_path).unwrap();
        categories.create("Extra", None).unwrap().unwrap();

        Db::open(&ctx.db_path).unwrap().init().unwrap();

        assert_eq!(tasks.fetch_all().unwrap().len(), 1);
        assert_eq!(categories.list().unwrap().len(), 6);
    }

    #[test_context(InitTestContext)]
    #[test]
    fn test_reset_restores_defaults(ctx: &mut InitTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        db.init().unwrap();

        let mut categories = Categories::open(&ctx.db_path).unwrap();
        categories.create("Extra", None).unwrap().unwrap();
        let default_id = categories.list().unwrap()[0].id.unwrap();
        categories.delete(default_id).unwrap();

        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        for title in ["A", "B"] {
            tasks.insert(&NewTask::new(title)).unwrap();
        }

        db.reset().unwrap();

        let all = categories.list().unwrap();
        assert_eq!(all.len(), 5);
        for ((name, color), category) in DEFAULT_CATEGORIES.iter().zip(&all) {
            assert_eq!(&category.name, name);
            assert_eq!(&category.color, color);
        }
        assert!(tasks.fetch_all().unwrap().is_empty());

        // Auto-increment counters restart from scratch.
        assert_eq!(all[0].id, Some(1));
        let task_id = tasks.insert(&NewTask::new("Fresh")).unwrap();
        assert_eq!(task_id, 1);
    }
}
