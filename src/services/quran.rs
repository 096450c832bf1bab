//! finder‌های مخصوص آیه، سوره و جزء

use tracing::instrument;

use super::ResourceService;
use crate::{
    database::{AyahRepository, JuzRepository, SurahRepository},
    error::Result,
    models::{Ayah, Juz, Page, PageRequest, Surah},
};

impl ResourceService<AyahRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_number(&self, number: i64) -> Result<Ayah> {
        self.repo.find_by_number(number).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_surah_number(
        &self,
        surah_number: i64,
        request: &PageRequest,
    ) -> Result<Page<Ayah>> {
        self.repo.find_by_surah_number(surah_number, request).await
    }
}

impl ResourceService<SurahRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_number(&self, number: i64) -> Result<Surah> {
        self.repo.find_by_number(number).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Surah> {
        self.repo.find_by_name(name).await
    }
}

impl ResourceService<JuzRepository> {
    #[instrument(skip(self))]
    pub async fn find_by_surah_name(&self, name: &str, request: &PageRequest) -> Result<Page<Juz>> {
        self.repo.find_by_surah_name(name, request).await
    }
}
