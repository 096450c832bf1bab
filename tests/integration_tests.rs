//! # تست‌های Integration
//!
//! repository‌ها روی دیتابیس in-memory و کل router با `oneshot`.
//!
//! ## اجرای تست‌ها:
//! ```bash
//! cargo test                              # همه تست‌ها
//! cargo test --test integration_tests     # فقط این فایل
//! cargo test repository_tests             # فقط تست‌های repository
//! ```

// =====================================
// Fixtures
// =====================================
mod fixtures {
    use islamic_explorer::{
        database::{
            AyahRepository, BookRepository, ChapterRepository, Database, HadithRepository,
            JuzRepository, SurahRepository, ThemeRepository,
        },
        models::{
            AyahPayload, BookPayload, ChapterPayload, HadithPayload, JuzPayload, Paginator,
            SurahPayload, ThemePayload, TranslationPayload,
        },
    };

    pub async fn db() -> Database {
        Database::in_memory()
            .await
            .expect("in-memory database should start")
    }

    pub struct Repos {
        pub ayah: AyahRepository,
        pub surah: SurahRepository,
        pub juz: JuzRepository,
        pub books: BookRepository,
        pub themes: ThemeRepository,
        pub chapters: ChapterRepository,
        pub hadiths: HadithRepository,
    }

    pub async fn repos() -> (Database, Repos) {
        let db = db().await;
        let paginator = Paginator::new(10, 100);

        let repos = Repos {
            ayah: AyahRepository::new(db.clone(), paginator),
            surah: SurahRepository::new(db.clone(), paginator),
            juz: JuzRepository::new(db.clone(), paginator),
            books: BookRepository::new(db.clone(), paginator),
            themes: ThemeRepository::new(db.clone(), paginator),
            chapters: ChapterRepository::new(db.clone(), paginator),
            hadiths: HadithRepository::new(db.clone(), paginator),
        };

        (db, repos)
    }

    pub fn book(slug: &str) -> BookPayload {
        BookPayload {
            slug: slug.to_string(),
            translation: TranslationPayload::en(slug),
            media: Vec::new(),
            theme_ids: Vec::new(),
        }
    }

    pub fn theme(name: &str) -> ThemePayload {
        ThemePayload {
            translation: TranslationPayload {
                en: Some(name.to_string()),
                idn: Some(format!("{} (id)", name)),
                ..TranslationPayload::default()
            },
        }
    }

    pub fn chapter(theme_id: i64) -> ChapterPayload {
        ChapterPayload {
            theme_id,
            translation: TranslationPayload::en("chapter"),
        }
    }

    pub fn hadith(book_id: i64, number: i64) -> HadithPayload {
        HadithPayload {
            book_id,
            theme_id: None,
            chapter_id: None,
            number,
            translation: TranslationPayload::en(format!("hadith {}", number)),
        }
    }

    pub fn surah(number: i64, name: &str) -> SurahPayload {
        SurahPayload {
            number,
            name: name.to_string(),
            translation: TranslationPayload::default(),
        }
    }

    pub fn ayah(surah_id: i64, number: i64) -> AyahPayload {
        AyahPayload {
            surah_id,
            number,
            translation: TranslationPayload {
                ar: Some(format!("ayah {}", number)),
                ..TranslationPayload::default()
            },
        }
    }

    pub fn juz(number: i64, start: (i64, i64), end: (i64, i64)) -> JuzPayload {
        JuzPayload {
            number,
            start_surah_number: start.0,
            start_ayah_number: start.1,
            end_surah_number: end.0,
            end_ayah_number: end.1,
            translation: TranslationPayload::default(),
        }
    }
}

// =====================================
// تست‌های Config
// =====================================
mod config_tests {
    use islamic_explorer::config::{Config, ConfigBuilder, Environment};

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.endpoint, "/v1");
        assert!(config.environment.is_development());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .endpoint("/")
            .page_size(20, 50)
            .environment(Environment::Production)
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.endpoint, "");
        assert_eq!(config.page_size, 20);
        assert!(config.environment.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_validated_rejects_bad_page_size() {
        assert!(ConfigBuilder::new().page_size(500, 100).build_validated().is_err());
    }
}

// =====================================
// تست‌های Error
// =====================================
mod error_tests {
    use axum::http::StatusCode;
    use islamic_explorer::error::{AppError, ErrorResponse};

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Persistence("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Server("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_is_server_error() {
        assert!(AppError::Server("test".to_string()).is_server_error());
        assert!(!AppError::NotFound("test".to_string()).is_server_error());
    }

    #[test]
    fn test_error_response_carries_status() {
        let response = ErrorResponse::new("Not Found", "hadith '7' not found")
            .with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status_code, Some(404));
        assert_eq!(response.error, "Not Found");
    }
}

// =====================================
// تست‌های Models
// =====================================
mod model_tests {
    use islamic_explorer::models::{
        BookPayload, MediaPayload, PageRequest, Paginator, SurahPayload, TranslationPayload,
    };
    use validator::Validate;

    #[test]
    fn test_book_slug_validation() {
        let mut payload = BookPayload {
            slug: "sahih-bukhari".to_string(),
            translation: TranslationPayload::default(),
            media: Vec::new(),
            theme_ids: Vec::new(),
        };
        assert!(payload.validate().is_ok());

        payload.slug = "Sahih Bukhari".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_nested_media_is_validated() {
        let payload = BookPayload {
            slug: "muslim".to_string(),
            translation: TranslationPayload::default(),
            media: vec![MediaPayload {
                name: String::new(),
                url: "https://example.com/cover.png".to_string(),
                kind: None,
            }],
            theme_ids: Vec::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_surah_number_range() {
        let payload = |number| SurahPayload {
            number,
            name: "Al-Fatihah".to_string(),
            translation: TranslationPayload::default(),
        };

        assert!(payload(1).validate().is_ok());
        assert!(payload(114).validate().is_ok());
        assert!(payload(0).validate().is_err());
        assert!(payload(115).validate().is_err());
    }

    #[test]
    fn test_page_request_from_query() {
        let request: PageRequest =
            serde_json::from_str(r#"{"page": 2, "size": 500, "sort": "-number"}"#).unwrap();
        let window = Paginator::new(10, 100).window(&request);

        assert_eq!(window.page, 2);
        assert_eq!(window.size, 100);
        assert_eq!(window.offset(), 200);
    }
}

// =====================================
// تست‌های Repository (SQLite in-memory)
// =====================================
mod repository_tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::fixtures;
    use islamic_explorer::{
        database::{HadithScope, Repository},
        error::AppError,
        models::{DeleteScope, MediaPayload, PageRequest, TranslationPayload},
    };

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let (_db, repos) = fixtures::repos().await;

        let mut payload = fixtures::book("sahih-bukhari");
        payload.media.push(MediaPayload {
            name: "cover".to_string(),
            url: "https://example.com/bukhari.png".to_string(),
            kind: Some("image".to_string()),
        });

        let saved = repos.books.save(&payload).await.unwrap();
        let found = repos.books.find_by_id(saved.id).await.unwrap();

        assert_eq!(found.slug, "sahih-bukhari");
        assert!(payload.translation.matches(&found.translation));
        assert_eq!(found.media.len(), 1);
        assert_eq!(found.media[0].name, "cover");
        assert_eq!(found.media, saved.media);
    }

    #[tokio::test]
    async fn test_absent_ids_are_not_found() {
        let (_db, repos) = fixtures::repos().await;

        assert!(matches!(
            repos.books.find_by_id(42).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repos.books.update_by_id(42, &fixtures::book("x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repos.books.delete_by_id(42, DeleteScope::Soft).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_row_but_keeps_it() {
        let (db, repos) = fixtures::repos().await;
        let theme = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();

        repos.themes.delete_by_id(theme.id, DeleteScope::Soft).await.unwrap();

        assert!(matches!(
            repos.themes.find_by_id(theme.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repos.themes.update_by_id(theme.id, &fixtures::theme("x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repos.themes.delete_by_id(theme.id, DeleteScope::Soft).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(repos.themes.count().await.unwrap(), 0);

        let raw: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theme WHERE id = ?")
            .bind(theme.id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(raw, 1);
    }

    #[tokio::test]
    async fn test_hard_delete_removes_row_and_cascades() {
        let (db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("muslim")).await.unwrap();
        repos.hadiths.save(&fixtures::hadith(book.id, 1)).await.unwrap();

        repos.books.delete_by_id(book.id, DeleteScope::Hard).await.unwrap();

        let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(db.pool())
            .await
            .unwrap();
        let hadiths: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hadith")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(books, 0);
        assert_eq!(hadiths, 0);
    }

    /// ترجمه ردیف‌های حذف‌شده (مستقیم یا cascade) نباید بمونه
    #[tokio::test]
    async fn test_hard_delete_removes_translations() {
        let (db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("muslim")).await.unwrap();
        repos.hadiths.save(&fixtures::hadith(book.id, 1)).await.unwrap();
        let faith = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();
        repos.chapters.save(&fixtures::chapter(faith.id)).await.unwrap();

        let translations = || async {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM translation")
                .fetch_one(db.pool())
                .await
                .unwrap()
        };
        assert_eq!(translations().await, 4);

        repos.books.delete_by_id(book.id, DeleteScope::Hard).await.unwrap();
        assert_eq!(translations().await, 2);

        repos.themes.delete_by_id(faith.id, DeleteScope::Hard).await.unwrap();
        assert_eq!(translations().await, 0);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_translation() {
        let (db, repos) = fixtures::repos().await;
        let surah = repos.surah.save(&fixtures::surah(1, "Al-Fatihah")).await.unwrap();

        repos.surah.delete_by_id(surah.id, DeleteScope::Soft).await.unwrap();

        let kept: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM translation WHERE id = ?")
            .bind(surah.translation.id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(kept, 1);
    }

    #[tokio::test]
    async fn test_slug_can_be_reused_after_soft_delete() {
        let (_db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("abu-dawud")).await.unwrap();
        repos.books.delete_by_id(book.id, DeleteScope::Soft).await.unwrap();

        let again = repos.books.save(&fixtures::book("abu-dawud")).await.unwrap();
        assert_ne!(again.id, book.id);
    }

    #[tokio::test]
    async fn test_paging_visits_every_row_once() {
        let (_db, repos) = fixtures::repos().await;
        for i in 0..23 {
            repos.themes.save(&fixtures::theme(&format!("theme {}", i))).await.unwrap();
        }
        let deleted = repos.themes.find_by_id(4).await.unwrap();
        repos.themes.delete_by_id(deleted.id, DeleteScope::Soft).await.unwrap();

        let first = repos.themes.find_all(&PageRequest::new(0, 5)).await.unwrap();
        assert_eq!(first.total, 22);
        assert_eq!(first.total_pages, 5);

        let mut seen = HashSet::new();
        for page in 0..first.total_pages {
            let result = repos.themes.find_all(&PageRequest::new(page, 5)).await.unwrap();
            assert!(result.items.len() <= 5);
            for theme in result.items {
                assert!(seen.insert(theme.id), "theme {} returned twice", theme.id);
            }
        }

        assert_eq!(seen.len(), 22);
        assert!(!seen.contains(&4));
    }

    #[tokio::test]
    async fn test_sort_descending_and_unknown_field() {
        let (_db, repos) = fixtures::repos().await;
        for number in [3, 1, 2] {
            repos
                .surah
                .save(&fixtures::surah(number, &format!("surah-{}", number)))
                .await
                .unwrap();
        }

        let page = repos
            .surah
            .find_all(&PageRequest::default().sorted("-number"))
            .await
            .unwrap();
        let numbers: Vec<i64> = page.items.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);

        let unknown = repos
            .surah
            .find_all(&PageRequest::default().sorted("password"))
            .await;
        assert!(matches!(unknown, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_book_themes_follow_hadiths() {
        let (_db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("sahih-bukhari")).await.unwrap();
        for i in 1..=5 {
            repos.themes.save(&fixtures::theme(&format!("theme {}", i))).await.unwrap();
        }

        let before = repos.books.find_by_slug("sahih-bukhari").await.unwrap();
        assert!(before.themes.is_empty());

        let mut hadith = fixtures::hadith(book.id, 1);
        hadith.theme_id = Some(5);
        repos.hadiths.save(&hadith).await.unwrap();

        let after = repos.books.find_by_slug("sahih-bukhari").await.unwrap();
        let ids: Vec<i64> = after.themes.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[tokio::test]
    async fn test_book_themes_ordered_by_first_hadith() {
        let (_db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("tirmidhi")).await.unwrap();
        let faith = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();
        let prayer = repos.themes.save(&fixtures::theme("Prayer")).await.unwrap();

        for (number, theme_id) in [(1, prayer.id), (2, faith.id), (3, prayer.id)] {
            let mut hadith = fixtures::hadith(book.id, number);
            hadith.theme_id = Some(theme_id);
            repos.hadiths.save(&hadith).await.unwrap();
        }

        let found = repos.books.find_by_slug("tirmidhi").await.unwrap();
        let ids: Vec<i64> = found.themes.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![prayer.id, faith.id]);
    }

    #[tokio::test]
    async fn test_book_list_counts_hadiths() {
        let (_db, repos) = fixtures::repos().await;
        let book = repos.books.save(&fixtures::book("nasai")).await.unwrap();
        repos.books.save(&fixtures::book("ibn-majah")).await.unwrap();
        for number in 1..=3 {
            repos.hadiths.save(&fixtures::hadith(book.id, number)).await.unwrap();
        }

        let page = repos.books.find_all(&PageRequest::default()).await.unwrap();
        let counts: Vec<Option<i64>> = page.items.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![Some(3), Some(0)]);
    }

    #[tokio::test]
    async fn test_book_find_by_id_loads_linked_themes() {
        let (_db, repos) = fixtures::repos().await;
        let faith = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();

        let mut payload = fixtures::book("muwatta");
        payload.theme_ids = vec![faith.id];
        let book = repos.books.save(&payload).await.unwrap();
        assert_eq!(book.themes.len(), 1);

        let by_slug = repos
            .themes
            .find_by_book_slug("muwatta", &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(by_slug.total, 1);

        payload.theme_ids.clear();
        let updated = repos.books.update_by_id(book.id, &payload).await.unwrap();
        assert!(updated.themes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_parent_is_persistence_error() {
        let (_db, repos) = fixtures::repos().await;

        let mut payload = fixtures::book("darimi");
        payload.theme_ids = vec![99];
        assert!(matches!(
            repos.books.save(&payload).await,
            Err(AppError::Persistence(_))
        ));
        assert!(matches!(
            repos.hadiths.save(&fixtures::hadith(99, 1)).await,
            Err(AppError::Persistence(_))
        ));

        // تراکنش rollback شده، کتاب ساخته نشده
        assert_eq!(repos.books.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_surah_ayah_ordered_by_verse() {
        let (_db, repos) = fixtures::repos().await;
        let fatihah = repos.surah.save(&fixtures::surah(1, "Al-Fatihah")).await.unwrap();
        let baqarah = repos.surah.save(&fixtures::surah(2, "Al-Baqarah")).await.unwrap();

        for number in [4, 1, 7, 2, 6, 3, 5] {
            repos.ayah.save(&fixtures::ayah(fatihah.id, number)).await.unwrap();
        }
        repos.ayah.save(&fixtures::ayah(baqarah.id, 1)).await.unwrap();

        let page = repos
            .ayah
            .find_by_surah_number(1, &PageRequest::default())
            .await
            .unwrap();
        let numbers: Vec<i64> = page.items.iter().map(|a| a.number).collect();

        assert_eq!(page.total, 7);
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(page.items.iter().all(|a| a.surah_number == 1));
    }

    #[tokio::test]
    async fn test_surah_and_ayah_finders() {
        let (_db, repos) = fixtures::repos().await;
        let surah = repos.surah.save(&fixtures::surah(1, "Al-Fatihah")).await.unwrap();
        repos.ayah.save(&fixtures::ayah(surah.id, 3)).await.unwrap();

        assert_eq!(repos.surah.find_by_number(1).await.unwrap().id, surah.id);
        assert_eq!(repos.surah.find_by_name("al-fatihah").await.unwrap().id, surah.id);
        assert_eq!(repos.ayah.find_by_number(3).await.unwrap().surah_id, surah.id);

        assert!(matches!(
            repos.surah.find_by_number(2).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repos.ayah.find_by_number(4).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_juz_by_surah_name() {
        let (_db, repos) = fixtures::repos().await;
        repos.surah.save(&fixtures::surah(2, "Al-Baqarah")).await.unwrap();
        repos.juz.save(&fixtures::juz(1, (1, 1), (2, 141))).await.unwrap();
        repos.juz.save(&fixtures::juz(2, (2, 142), (2, 252))).await.unwrap();
        repos.juz.save(&fixtures::juz(4, (3, 93), (4, 23))).await.unwrap();

        let page = repos
            .juz
            .find_by_surah_name("al-baqarah", &PageRequest::default())
            .await
            .unwrap();
        let numbers: Vec<i64> = page.items.iter().map(|j| j.number).collect();

        assert_eq!(numbers, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_juz_listed_once_for_same_named_surahs() {
        let (_db, repos) = fixtures::repos().await;
        repos.surah.save(&fixtures::surah(2, "Al-Baqarah")).await.unwrap();
        repos.surah.save(&fixtures::surah(3, "al-baqarah")).await.unwrap();
        repos.juz.save(&fixtures::juz(3, (2, 253), (3, 92))).await.unwrap();

        let page = repos
            .juz
            .find_by_surah_name("Al-Baqarah", &PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_slug_on_update_is_persistence_error() {
        let (_db, repos) = fixtures::repos().await;
        repos.books.save(&fixtures::book("sahih-bukhari")).await.unwrap();
        let muslim = repos.books.save(&fixtures::book("sahih-muslim")).await.unwrap();

        let result = repos
            .books
            .update_by_id(muslim.id, &fixtures::book("sahih-bukhari"))
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_update_overwrites_translation() {
        let (_db, repos) = fixtures::repos().await;
        let chapter_theme = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();
        let chapter = repos
            .chapters
            .save(&fixtures::chapter(chapter_theme.id))
            .await
            .unwrap();

        let mut payload = fixtures::chapter(chapter_theme.id);
        payload.translation = TranslationPayload {
            ar: Some("باب".to_string()),
            ..TranslationPayload::default()
        };
        let updated = repos.chapters.update_by_id(chapter.id, &payload).await.unwrap();

        assert_eq!(updated.translation.ar.as_deref(), Some("باب"));
        assert_eq!(updated.translation.en, None);
        assert_eq!(updated.translation.id, chapter.translation.id);
    }

    #[tokio::test]
    async fn test_hadith_relation_finders() {
        let (_db, repos) = fixtures::repos().await;
        let bukhari = repos.books.save(&fixtures::book("sahih-bukhari")).await.unwrap();
        let muslim = repos.books.save(&fixtures::book("sahih-muslim")).await.unwrap();
        let faith = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();
        let revelation = repos.chapters.save(&fixtures::chapter(faith.id)).await.unwrap();

        for (book_id, number, chapter) in [
            (bukhari.id, 2, Some(revelation.id)),
            (bukhari.id, 1, Some(revelation.id)),
            (bukhari.id, 3, None),
            (muslim.id, 1, Some(revelation.id)),
        ] {
            let mut hadith = fixtures::hadith(book_id, number);
            hadith.theme_id = Some(faith.id);
            hadith.chapter_id = chapter;
            repos.hadiths.save(&hadith).await.unwrap();
        }

        let request = PageRequest::default();

        let by_book = repos.hadiths.find_by_book_slug("sahih-bukhari", &request).await.unwrap();
        let numbers: Vec<i64> = by_book.items.iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let by_name = repos.hadiths.find_by_theme_name("FAITH", &request).await.unwrap();
        assert_eq!(by_name.total, 4);
        let by_idn = repos.hadiths.find_by_theme_name("faith (id)", &request).await.unwrap();
        assert_eq!(by_idn.total, 4);

        let all_three = repos
            .hadiths
            .find_by_book_slug_theme_id_chapter_id("sahih-bukhari", faith.id, revelation.id, &request)
            .await
            .unwrap();
        assert_eq!(all_three.total, 2);

        let theme_chapter = repos
            .hadiths
            .find_by_theme_id_chapter_id(faith.id, revelation.id, &request)
            .await
            .unwrap();
        assert_eq!(theme_chapter.total, 3);

        let chapters = repos
            .chapters
            .find_by_book_slug_theme_id("sahih-muslim", faith.id, &request)
            .await
            .unwrap();
        assert_eq!(chapters.total, 1);

        let none = repos
            .hadiths
            .find_by_book_slug_chapter_id("unknown-book", revelation.id, &request)
            .await
            .unwrap();
        assert_eq!(none.total, 0);
    }

    #[tokio::test]
    async fn test_scope_with_book_and_theme_name() {
        let (_db, repos) = fixtures::repos().await;
        let bukhari = repos.books.save(&fixtures::book("sahih-bukhari")).await.unwrap();
        let muslim = repos.books.save(&fixtures::book("sahih-muslim")).await.unwrap();
        let faith = repos.themes.save(&fixtures::theme("Faith")).await.unwrap();
        let prayer = repos.themes.save(&fixtures::theme("Prayer")).await.unwrap();

        for (book_id, number, theme_id) in [
            (muslim.id, 1, faith.id),
            (muslim.id, 2, prayer.id),
            (bukhari.id, 1, faith.id),
        ] {
            let mut hadith = fixtures::hadith(book_id, number);
            hadith.theme_id = Some(theme_id);
            repos.hadiths.save(&hadith).await.unwrap();
        }

        let scope = HadithScope {
            book_slug: Some("sahih-muslim"),
            theme_name: Some("faith"),
            ..HadithScope::default()
        };
        let page = repos.hadiths.find_scoped(&scope, &PageRequest::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].book_id, muslim.id);
        assert_eq!(page.items[0].theme_id, Some(faith.id));
    }
}

// =====================================
// تست‌های API (router کامل)
// =====================================
mod api_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::fixtures;
    use islamic_explorer::{api::create_router, config::ConfigBuilder};

    async fn app() -> Router {
        let config = ConfigBuilder::new().endpoint("/v1").build();
        create_router(fixtures::db().await, config)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    #[tokio::test]
    async fn test_index_lists_resources() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/v1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documentation"], "/v1/swagger/index.html");
        assert_eq!(body["resources"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn test_book_lifecycle() {
        let app = app().await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/v1/books",
            Some(json!({ "slug": "sahih-bukhari", "translation": { "en": "Sahih al-Bukhari" } })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();

        let (status, found) = send(&app, Method::GET, "/v1/books/slug/sahih-bukhari", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["translation"]["en"], "Sahih al-Bukhari");

        let (status, deleted) = send(&app, Method::DELETE, &format!("/v1/books/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["success"], true);

        let (status, error) = send(&app, Method::GET, &format!("/v1/books/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["status_code"], 404);
    }

    #[tokio::test]
    async fn test_hard_delete_route() {
        let app = app().await;
        let (_, created) = send(
            &app,
            Method::POST,
            "/v1/themes",
            Some(json!({ "translation": { "en": "Faith" } })),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let (status, _) = send(&app, Method::DELETE, &format!("/v1/themes/{}/hard", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::DELETE, &format!("/v1/themes/{}/hard", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_path_parameter_is_400() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/v1/hadiths/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }

    #[tokio::test]
    async fn test_invalid_payload_is_400() {
        let app = app().await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/v1/surah",
            Some(json!({ "number": 200, "name": "Too Far" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_number_is_500() {
        let app = app().await;
        let surah = json!({ "number": 1, "name": "Al-Fatihah" });

        let (status, _) = send(&app, Method::POST, "/v1/surah", Some(surah.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(&app, Method::POST, "/v1/surah", Some(surah)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_pagination_query() {
        let app = app().await;
        for number in 1..=3 {
            send(
                &app,
                Method::POST,
                "/v1/juz",
                Some(json!({
                    "number": number,
                    "start_surah_number": number,
                    "start_ayah_number": 1,
                    "end_surah_number": number,
                    "end_ayah_number": 5
                })),
            )
            .await;
        }

        let (status, page) = send(&app, Method::GET, "/v1/juz?page=1&size=2&sort=-number", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 3);
        assert_eq!(page["visible"], 1);
        assert_eq!(page["last"], true);
        assert_eq!(page["items"][0]["number"], 1);

        let (status, _) = send(&app, Method::GET, "/v1/juz?sort=secret", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_info_counts() {
        let app = app().await;
        send(&app, Method::POST, "/v1/themes", Some(json!({}))).await;

        let (status, info) = send(&app, Method::GET, "/v1/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(info["counts"]["themes"], 1);
        assert_eq!(info["counts"]["books"], 0);
    }

    #[tokio::test]
    async fn test_swagger_document_and_ui() {
        let app = app().await;

        let (status, doc) = send(&app, Method::GET, "/v1/swagger.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["servers"][0]["url"], "/v1");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/swagger/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let app = app().await;
        let response = app
            .oneshot(Request::builder().uri("/v1/info").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_empty_endpoint_serves_at_root() {
        let config = ConfigBuilder::new().endpoint("/").build();
        let app = create_router(fixtures::db().await, config);

        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documentation"], "/swagger/index.html");
    }
}

// =====================================
// Property-Based Tests
// =====================================
mod property_tests {
    use islamic_explorer::models::{total_pages, Page, PageRequest, PageWindow, Paginator};
    use proptest::prelude::*;

    proptest! {
        /// اندازه صفحه هیچوقت از سقف بیشتر یا صفر نمیشه
        #[test]
        fn window_size_is_clamped(size in proptest::option::of(0u32..10_000), page in 0u32..1_000) {
            let paginator = Paginator::new(10, 100);
            let window = paginator.window(&PageRequest { page: Some(page), size, sort: None });

            prop_assert!(window.size >= 1 && window.size <= 100);
            prop_assert_eq!(window.offset(), i64::from(page) * i64::from(window.size));
        }

        /// صفحه‌ها همه ردیف‌ها رو دقیقا یک بار پوشش میدن
        #[test]
        fn pages_cover_total(total in 0i64..10_000, size in 1u32..200) {
            let pages = i64::from(total_pages(total, size));

            prop_assert!(pages * i64::from(size) >= total);
            prop_assert!((pages - 1).max(0) * i64::from(size) < total.max(1));
        }

        #[test]
        fn last_flag_matches_max_page(total in 0i64..1_000, size in 1u32..50, page in 0u32..100) {
            let result: Page<()> = Page::new(Vec::new(), PageWindow { page, size }, total);

            prop_assert_eq!(result.last, page >= result.max_page);
            prop_assert_eq!(result.first, page == 0);
        }
    }
}
