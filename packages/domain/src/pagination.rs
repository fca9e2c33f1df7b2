//! # ページ指定
//!
//! 一覧取得で返す範囲を、ページ番号（1 始まり）とページサイズで表現する。
//!
//! ## 解釈規則
//!
//! | `page` | `pageSize` | 結果 |
//! |--------|------------|------|
//! | なし | なし | ページ指定なし（全件） |
//! | 正の整数 | 正の整数 | 指定ページ |
//! | 上記以外 | | [`ValidationError::InvalidPagination`] |
//!
//! 読み飛ばす件数 `(page - 1) * pageSize` が `i64` に収まらない組み合わせも
//! [`ValidationError::InvalidPagination`] とする。
//!
//! 片方だけの指定や数値でない値は、全件取得に黙ってフォールバックせず、
//! 検証エラーとする。

use crate::error::ValidationError;

/// 一覧取得のページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
   page:      u32,
   page_size: u32,
   offset:    i64,
}

impl Pagination {
   /// ページ番号とページサイズからページ指定を作成する
   ///
   /// どちらかが 0 の場合、または読み飛ばす件数が `i64` に収まらない場合は
   /// [`ValidationError::InvalidPagination`] を返す。
   pub fn new(page: u32, page_size: u32) -> Result<Self, ValidationError> {
      if page == 0 || page_size == 0 {
         return Err(ValidationError::InvalidPagination);
      }
      let offset = (i64::from(page) - 1)
         .checked_mul(i64::from(page_size))
         .ok_or(ValidationError::InvalidPagination)?;
      Ok(Self {
         page,
         page_size,
         offset,
      })
   }

   /// クエリパラメータの生の値からページ指定を解釈する
   ///
   /// 両方とも未指定なら `Ok(None)`（全件取得）を返す。
   ///
   /// ```rust
   /// use ridebook_domain::{ValidationError, pagination::Pagination};
   ///
   /// assert_eq!(Pagination::from_query(None, None), Ok(None));
   ///
   /// let pagination = Pagination::from_query(Some("2"), Some("10")).unwrap().unwrap();
   /// assert_eq!(pagination.offset(), 10);
   ///
   /// assert_eq!(
   ///     Pagination::from_query(Some("two"), Some("10")),
   ///     Err(ValidationError::InvalidPagination)
   /// );
   /// ```
   pub fn from_query(
      page: Option<&str>,
      page_size: Option<&str>,
   ) -> Result<Option<Self>, ValidationError> {
      match (page, page_size) {
         (None, None) => Ok(None),
         (Some(page), Some(page_size)) => {
            Self::new(parse_positive(page)?, parse_positive(page_size)?).map(Some)
         }
         _ => Err(ValidationError::InvalidPagination),
      }
   }

   pub fn page(&self) -> u32 {
      self.page
   }

   pub fn page_size(&self) -> u32 {
      self.page_size
   }

   /// 読み飛ばす件数（`(page - 1) * page_size`）
   pub fn offset(&self) -> i64 {
      self.offset
   }

   /// 取得する最大件数
   pub fn limit(&self) -> i64 {
      i64::from(self.page_size)
   }
}

fn parse_positive(value: &str) -> Result<u32, ValidationError> {
   value
      .trim()
      .parse::<u32>()
      .map_err(|_| ValidationError::InvalidPagination)
}

#[cfg(test)]
mod tests {
   use rstest::rstest;

   use super::*;

   #[test]
   fn test_両方未指定ならページ指定なしを返す() {
      assert_eq!(Pagination::from_query(None, None), Ok(None));
   }

   #[rstest]
   #[case("1", "2", 0, 2)]
   #[case("2", "2", 2, 2)]
   #[case("3", "10", 20, 10)]
   fn test_offsetとlimitを計算する(
      #[case] page: &str,
      #[case] page_size: &str,
      #[case] offset: i64,
      #[case] limit: i64,
   ) {
      let pagination = Pagination::from_query(Some(page), Some(page_size))
         .unwrap()
         .unwrap();

      assert_eq!(pagination.offset(), offset);
      assert_eq!(pagination.limit(), limit);
   }

   #[test]
   fn test_offsetがi64に収まらない組み合わせはinvalid_paginationを返す() {
      assert_eq!(
         Pagination::new(u32::MAX, u32::MAX),
         Err(ValidationError::InvalidPagination)
      );
      assert_eq!(
         Pagination::from_query(Some("4294967295"), Some("4294967295")),
         Err(ValidationError::InvalidPagination)
      );
   }

   #[test]
   fn test_offsetがi64に収まる大きなページは受け付ける() {
      let pagination = Pagination::new(u32::MAX, 2).unwrap();

      assert_eq!(pagination.offset(), (i64::from(u32::MAX) - 1) * 2);
      assert_eq!(pagination.limit(), 2);
   }

   #[rstest]
   #[case(Some("abc"), Some("2"))]
   #[case(Some("1"), Some("abc"))]
   #[case(Some("0"), Some("2"))]
   #[case(Some("1"), Some("0"))]
   #[case(Some("-1"), Some("2"))]
   #[case(Some("1.5"), Some("2"))]
   #[case(Some(""), Some("2"))]
   #[case(Some("1"), None)]
   #[case(None, Some("2"))]
   fn test_不正なページ指定はinvalid_paginationを返す(
      #[case] page: Option<&str>,
      #[case] page_size: Option<&str>,
   ) {
      assert_eq!(
         Pagination::from_query(page, page_size),
         Err(ValidationError::InvalidPagination)
      );
   }
}
