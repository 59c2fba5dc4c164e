use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Reports whether a key or value is empty or absent.
///
/// The cache ignores any `put` whose key or value is blank. Strings and
/// collections are blank when empty, `Option` is blank when `None` (and
/// otherwise defers to its contents). Numbers, `bool` and `char` are never
/// blank.
pub trait Blank {
  fn is_blank(&self) -> bool;
}

impl Blank for str {
  #[inline]
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl Blank for String {
  #[inline]
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl<T> Blank for [T] {
  #[inline]
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl<T> Blank for Vec<T> {
  #[inline]
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl<T: Blank> Blank for Option<T> {
  #[inline]
  fn is_blank(&self) -> bool {
    self.as_ref().map_or(true, Blank::is_blank)
  }
}

impl<T: Blank + ?Sized> Blank for &T {
  #[inline]
  fn is_blank(&self) -> bool {
    (**self).is_blank()
  }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
  #[inline]
  fn is_blank(&self) -> bool {
    (**self).is_blank()
  }
}

impl<T: Blank + ?Sized> Blank for Arc<T> {
  #[inline]
  fn is_blank(&self) -> bool {
    (**self).is_blank()
  }
}

impl<T: Blank + ?Sized> Blank for Rc<T> {
  #[inline]
  fn is_blank(&self) -> bool {
    (**self).is_blank()
  }
}

impl<B> Blank for Cow<'_, B>
where
  B: Blank + ToOwned + ?Sized,
{
  #[inline]
  fn is_blank(&self) -> bool {
    (**self).is_blank()
  }
}

macro_rules! never_blank {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Blank for $ty {
        #[inline]
        fn is_blank(&self) -> bool {
          false
        }
      }
    )*
  };
}

never_blank!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
