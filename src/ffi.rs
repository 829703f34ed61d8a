/*!
ODBC constants used at the buffer boundary.

Only the handful of values needed to describe a text buffer to a driver live here; everything else belongs to whatever binds the driver itself.
*/
use libc::c_short;

// TODO: replace with the `odbc-sys` definitions once the binding layer depends on it.

pub type SQLSMALLINT = c_short;
pub type SQLLEN = isize;

/// Length indicator: the value is NULL.
pub const SQL_NULL_DATA: SQLLEN = -1;

/// Length indicator: the buffer is null terminated.
pub const SQL_NTS: SQLLEN = -3;

pub const SQL_C_CHAR: SQLSMALLINT = 1;
pub const SQL_C_WCHAR: SQLSMALLINT = -8;

pub const SQL_CHAR: SQLSMALLINT = 1;
pub const SQL_WCHAR: SQLSMALLINT = -8;

/**
Not an ODBC type.  Used to select the decoding applied to metadata such as column names, which some drivers return in a different encoding from the data itself.
*/
pub const SQL_WMETADATA: SQLSMALLINT = -888;
