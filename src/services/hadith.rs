//! finder‌های مخصوص کتاب، theme، باب و حدیث

use tracing::instrument;

use super::ResourceService;
use crate::{
    database::{BookRepository, ChapterRepository, HadithRepository, ThemeRepository},
    error::Result,
    models::{Book, Chapter, Hadith, Page, PageRequest, Theme},
};

impl ResourceService<BookRepository> {
    /// کتاب با theme‌هایی که از حدیث‌هاش ساخته شدن
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: &str) -> Result<Book> {
        self.repo.find_by_slug(slug).await
    }
}

impl ResourceService<ThemeRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_book_slug(&self, slug: &str, request: &PageRequest) -> Result<Page<Theme>> {
        self.repo.find_by_book_slug(slug, request).await
    }
}

impl ResourceService<ChapterRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_theme_id(
        &self,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Chapter>> {
        self.repo.find_by_theme_id(theme_id, request).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_book_slug_theme_id(
        &self,
        slug: &str,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Chapter>> {
        self.repo
            .find_by_book_slug_theme_id(slug, theme_id, request)
            .await
    }
}

impl ResourceService<HadithRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_book_slug(&self, slug: &str, request: &PageRequest) -> Result<Page<Hadith>> {
        self.repo.find_by_book_slug(slug, request).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_theme_id(
        &self,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo.find_by_theme_id(theme_id, request).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_theme_name(&self, name: &str, request: &PageRequest) -> Result<Page<Hadith>> {
        self.repo.find_by_theme_name(name, request).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_book_slug_theme_id(
        &self,
        slug: &str,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo
            .find_by_book_slug_theme_id(slug, theme_id, request)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_chapter_id(
        &self,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo.find_by_chapter_id(chapter_id, request).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_book_slug_chapter_id(
        &self,
        slug: &str,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo
            .find_by_book_slug_chapter_id(slug, chapter_id, request)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_theme_id_chapter_id(
        &self,
        theme_id: i64,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo
            .find_by_theme_id_chapter_id(theme_id, chapter_id, request)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_book_slug_theme_id_chapter_id(
        &self,
        slug: &str,
        theme_id: i64,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        self.repo
            .find_by_book_slug_theme_id_chapter_id(slug, theme_id, chapter_id, request)
            .await
    }
}
