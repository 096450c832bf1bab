//! # مستندات OpenAPI
//!
//! همه handler‌ها و schema‌ها اینجا ثبت میشن؛ `GET /swagger.json`
//! این سند رو با پیشوند فعلی به عنوان server برمیگردونه.

use utoipa::OpenApi;

use super::handlers::{self, ayah, book, chapter, hadith, juz, surah, theme};
use crate::{
    error::ErrorResponse,
    models::{
        ApiIndex, ApiInfo, Ayah, AyahPage, AyahPayload, Book, BookPage, BookPayload, Chapter,
        ChapterPage, ChapterPayload, EmptyResponse, Hadith, HadithPage, HadithPayload, Juz,
        JuzPage, JuzPayload, Media, MediaPayload, ResourceCounts, ResourceLink, Surah, SurahPage,
        SurahPayload, Theme, ThemePage, ThemePayload, Translation, TranslationPayload,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "islamic-explorer",
        description = "Quran (ayah, surah, juz) and hadith (books, themes, chapters) reference API"
    ),
    paths(
        handlers::index,
        handlers::info,
        ayah::create_ayah,
        ayah::list_ayah,
        ayah::get_ayah,
        ayah::get_ayah_by_number,
        ayah::list_ayah_by_surah_number,
        ayah::update_ayah,
        ayah::delete_ayah,
        ayah::delete_ayah_scoped,
        surah::create_surah,
        surah::list_surah,
        surah::get_surah,
        surah::get_surah_by_number,
        surah::get_surah_by_name,
        surah::update_surah,
        surah::delete_surah,
        surah::delete_surah_scoped,
        juz::create_juz,
        juz::list_juz,
        juz::get_juz,
        juz::list_juz_by_surah_name,
        juz::update_juz,
        juz::delete_juz,
        juz::delete_juz_scoped,
        book::create_book,
        book::list_books,
        book::get_book,
        book::get_book_by_slug,
        book::update_book,
        book::delete_book,
        book::delete_book_scoped,
        theme::create_theme,
        theme::list_themes,
        theme::get_theme,
        theme::list_themes_by_book_slug,
        theme::update_theme,
        theme::delete_theme,
        theme::delete_theme_scoped,
        chapter::create_chapter,
        chapter::list_chapters,
        chapter::get_chapter,
        chapter::list_chapters_by_theme,
        chapter::list_chapters_by_book_theme,
        chapter::update_chapter,
        chapter::delete_chapter,
        chapter::delete_chapter_scoped,
        hadith::create_hadith,
        hadith::list_hadiths,
        hadith::get_hadith,
        hadith::update_hadith,
        hadith::delete_hadith,
        hadith::delete_hadith_scoped,
        hadith::list_hadiths_by_book,
        hadith::list_hadiths_by_theme,
        hadith::list_hadiths_by_theme_name,
        hadith::list_hadiths_by_book_theme,
        hadith::list_hadiths_by_chapter,
        hadith::list_hadiths_by_book_chapter,
        hadith::list_hadiths_by_theme_chapter,
        hadith::list_hadiths_by_book_theme_chapter,
    ),
    components(schemas(
        Translation, TranslationPayload,
        Ayah, AyahPayload, AyahPage,
        Surah, SurahPayload, SurahPage,
        Juz, JuzPayload, JuzPage,
        Book, BookPayload, BookPage, Media, MediaPayload,
        Theme, ThemePayload, ThemePage,
        Chapter, ChapterPayload, ChapterPage,
        Hadith, HadithPayload, HadithPage,
        EmptyResponse, ErrorResponse,
        ApiIndex, ApiInfo, ResourceCounts, ResourceLink,
    )),
    tags(
        (name = "meta", description = "Index and info"),
        (name = "ayah", description = "Quran verses"),
        (name = "surah", description = "Quran chapters"),
        (name = "juz", description = "The thirty divisions of the Quran"),
        (name = "books", description = "Hadith collections"),
        (name = "themes", description = "Hadith themes"),
        (name = "chapters", description = "Chapters within a theme"),
        (name = "hadiths", description = "Hadith narrations"),
    )
)]
pub struct ApiDoc;
