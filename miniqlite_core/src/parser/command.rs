use crate::types::datatype::DataType;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub dtype: DataType,
}

/// `column = value`, used by WHERE clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    All,
    Columns(Vec<String>),
}

/// One fully parsed statement, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTable {
        table: String,
        columns: Vec<ColumnDef>,
    },

    DropTable {
        table: String,
    },

    Insert {
        table: String,
        values: Vec<String>,
    },

    Select {
        table: String,
        projection: Projection,
        filter: Option<Predicate>,
    },

    Update {
        table: String,
        assignment: Assignment,
        filter: Predicate,
    },

    Delete {
        table: String,
        filter: Predicate,
    },
}
