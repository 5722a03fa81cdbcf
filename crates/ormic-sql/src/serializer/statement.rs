use super::{And, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

use ormic_core::stmt::Value;

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(
            f,
            "CREATE TABLE ",
            if_not_exists,
            Ident(&self.table),
            " (",
            Comma(&self.columns),
            ")"
        );
    }
}

impl ToSql for &stmt::ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(&self.name), " ", &self.storage_ty);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO ", Ident(&self.table), " DEFAULT VALUES");
            return;
        }

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(self.columns.iter().map(Ident)),
            ") VALUES (",
            Comma(&self.values),
            ")"
        );
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let assignments = self
            .assignments
            .iter()
            .map(|(column, value)| Assignment { column, value });

        fmt!(f, "UPDATE ", Ident(&self.table), " SET ", Comma(assignments));

        if let Some(filter) = &self.filter {
            fmt!(f, Where(filter));
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self.limit {
            None => fmt!(f, "DELETE FROM ", Ident(&self.table), Where(&self.filter)),
            // SQLite is not built with `DELETE ... LIMIT`, bound the rowids instead
            Some(limit) => fmt!(
                f,
                "DELETE FROM ",
                Ident(&self.table),
                " WHERE rowid IN (SELECT rowid FROM ",
                Ident(&self.table),
                Where(&self.filter),
                " LIMIT ",
                limit,
                ")"
            ),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.columns.is_empty() {
            fmt!(f, "SELECT *");
        } else {
            fmt!(f, "SELECT ", Comma(self.columns.iter().map(Ident)));
        }

        fmt!(f, " FROM ", Ident(&self.table), Where(&self.filter));

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT ", limit);
        }
    }
}

/// ` WHERE a = ?1 AND b = ?2`, or nothing for an empty filter.
struct Where<'a>(&'a stmt::Filter);

impl ToSql for Where<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.0.is_empty() {
            return;
        }

        let equalities = self.0.equalities.iter().map(|(column, value)| Equality {
            column,
            value,
        });
        fmt!(f, " WHERE ", And(equalities));
    }
}

struct Equality<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Equality<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // `= NULL` never matches
        if self.value.is_null() {
            fmt!(f, Ident(self.column), " IS NULL");
        } else {
            fmt!(f, Ident(self.column), " = ", self.value);
        }
    }
}

struct Assignment<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Assignment<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(self.column), " = ", self.value);
    }
}
