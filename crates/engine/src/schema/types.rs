//! Entity kinds and field specifications.

use serde::{Deserialize, Serialize};

/// Display/formatting class of a field.
///
/// The class drives formatting, sort comparators, and table truncation
/// budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldClass {
    /// Monetary amount, two fraction digits plus the currency symbol.
    Currency,
    /// Plain decimal quantity (areas, volumes, heights).
    Decimal,
    /// Whole-number quantity (tree counts, samples).
    Count,
    /// Calendar date.
    Date,
    /// Long descriptive text.
    Text,
    /// Short identifier or code (registry numbers, cost centers, units).
    Code,
}

impl FieldClass {
    /// Per-class truncation budget for table cells, in characters.
    ///
    /// Long text is cut at 25, identifiers at 15; numeric and date output
    /// is already bounded by its formatting.
    #[must_use]
    pub const fn truncation_budget(self) -> Option<usize> {
        match self {
            Self::Text => Some(25),
            Self::Code => Some(15),
            Self::Currency | Self::Decimal | Self::Count | Self::Date => None,
        }
    }

    /// True for classes that aggregate numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Currency | Self::Decimal | Self::Count)
    }
}

/// One declared field of an entity schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field key as found in upstream records.
    pub key: &'static str,
    /// Human-readable column header.
    pub label: &'static str,
    /// Display class.
    pub class: FieldClass,
}

const fn field(key: &'static str, label: &'static str, class: FieldClass) -> FieldSpec {
    FieldSpec { key, label, class }
}

/// The domain entity kinds the engine can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An expense line against a property.
    Expense,
    /// A thinning (desbaste) harvest event.
    Thinning,
    /// A pruning (desrama) event.
    Pruning,
    /// A forest inventory entry.
    Inventory,
    /// A property record.
    Property,
}

impl EntityKind {
    /// URL/file-name slug for this entity kind.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Expense => "despesas",
            Self::Thinning => "desbaste",
            Self::Pruning => "desrama",
            Self::Inventory => "inventario",
            Self::Property => "imoveis",
        }
    }

    /// Report title for this entity kind.
    #[must_use]
    pub const fn report_title(self) -> &'static str {
        match self {
            Self::Expense => "Relatório de Despesas",
            Self::Thinning => "Relatório de Desbaste",
            Self::Pruning => "Relatório de Desrama",
            Self::Inventory => "Relatório de Inventário",
            Self::Property => "Relatório de Imóveis",
        }
    }

    /// The declared fields available to reports on this entity kind.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Expense => EXPENSE_FIELDS,
            Self::Thinning => THINNING_FIELDS,
            Self::Pruning => PRUNING_FIELDS,
            Self::Inventory => INVENTORY_FIELDS,
            Self::Property => PROPERTY_FIELDS,
        }
    }

    /// Looks up a declared field by key.
    #[must_use]
    pub fn field(self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// True for period-driven reports that only make sense over an explicit
    /// date range.
    ///
    /// Expense reports aggregate a period (the range drives the subtitle,
    /// the file name, and the totals). The other kinds are full-history
    /// exports where the range is an optional narrowing.
    #[must_use]
    pub const fn requires_date_range(self) -> bool {
        matches!(self, Self::Expense)
    }
}

const EXPENSE_FIELDS: &[FieldSpec] = &[
    field("data", "Data", FieldClass::Date),
    field("tipo_de_despesa", "Tipo de Despesa", FieldClass::Text),
    field("fornecedor", "Fornecedor", FieldClass::Text),
    field("produto", "Produto", FieldClass::Text),
    field("descricao", "Descrição", FieldClass::Text),
    field("descricao_imovel", "Imóvel", FieldClass::Text),
    field("unidade", "Unidade", FieldClass::Code),
    field("quantidade", "Quantidade", FieldClass::Count),
    field("valor_unitario", "Valor Unitário", FieldClass::Currency),
    field("total", "Total", FieldClass::Currency),
    field("vencimento", "Vencimento", FieldClass::Date),
    field("codigo_cc", "Código CC", FieldClass::Code),
];

const THINNING_FIELDS: &[FieldSpec] = &[
    field("numero", "Número", FieldClass::Count),
    field("data", "Data", FieldClass::Date),
    field("arvores_cortadas", "Árvores Cortadas", FieldClass::Count),
    field("lenha", "Lenha", FieldClass::Decimal),
    field("toretes", "Toretes", FieldClass::Decimal),
    field("toras_20_25cm", "Toras 20-25 cm", FieldClass::Decimal),
    field("toras_25_33cm", "Toras 25-33 cm", FieldClass::Decimal),
    field("toras_acima_33cm", "Toras Acima de 33 cm", FieldClass::Decimal),
    field("preco_lenha", "Preço Lenha", FieldClass::Currency),
    field("preco_toretes", "Preço Toretes", FieldClass::Currency),
    field("preco_toras_20_25cm", "Preço Toras 20-25 cm", FieldClass::Currency),
    field("preco_toras_25_33cm", "Preço Toras 25-33 cm", FieldClass::Currency),
    field(
        "preco_toras_acima_33cm",
        "Preço Toras Acima de 33 cm",
        FieldClass::Currency,
    ),
    field("valor_extracao", "Valor Extração", FieldClass::Currency),
    field("total_geral", "Total Geral", FieldClass::Currency),
];

const PRUNING_FIELDS: &[FieldSpec] = &[
    field("numero", "Número", FieldClass::Count),
    field("data", "Data", FieldClass::Date),
    field("altura", "Altura (m)", FieldClass::Decimal),
    field("previsao", "Previsão", FieldClass::Date),
];

const INVENTORY_FIELDS: &[FieldSpec] = &[
    field("numero_inventario", "Número", FieldClass::Code),
    field("data", "Data", FieldClass::Date),
    field("quantidade_amostras", "Quantidade Amostras", FieldClass::Count),
    field("quantidade_arvores", "Quantidade Árvores", FieldClass::Count),
    field("peso_kg_m3", "Peso (kg/m³)", FieldClass::Decimal),
    field("diametro_medio", "Diâmetro Médio", FieldClass::Decimal),
    field("altura_media", "Altura Média", FieldClass::Decimal),
    field("volume_total_m3", "Volume Total (m³)", FieldClass::Decimal),
    field("volume_total_ton", "Volume Total (TON)", FieldClass::Decimal),
    field("volume_lenha", "Volume Lenha", FieldClass::Decimal),
    field("volume_15_a_20", "Volume 15 a 20", FieldClass::Decimal),
    field("volume_20_a_25", "Volume 20 a 25", FieldClass::Decimal),
    field("volume_25_a_33", "Volume 25 a 33", FieldClass::Decimal),
    field("volume_33_acima", "Volume 33 acima", FieldClass::Decimal),
    field("valor_lenha", "Valor Lenha (R$)", FieldClass::Currency),
    field("valor_15_a_20", "Valor 15 a 20 (R$)", FieldClass::Currency),
    field("valor_20_a_25", "Valor 20 a 25 (R$)", FieldClass::Currency),
    field("valor_25_a_33", "Valor 25 a 33 (R$)", FieldClass::Currency),
    field("valor_33_acima", "Valor 33 acima (R$)", FieldClass::Currency),
    field("valor_total", "Valor Total (R$)", FieldClass::Currency),
];

const PROPERTY_FIELDS: &[FieldSpec] = &[
    field("descricao", "Descrição", FieldClass::Text),
    field("area_imovel", "Área do Imóvel (ha)", FieldClass::Decimal),
    field("area_plantio", "Área de Plantio (ha)", FieldClass::Decimal),
    field("especie", "Espécie", FieldClass::Text),
    field("origem", "Origem", FieldClass::Text),
    field(
        "num_arvores_plantadas",
        "Nº de Árvores Plantadas",
        FieldClass::Count,
    ),
    field(
        "num_arvores_cortadas",
        "Nº de Árvores Cortadas",
        FieldClass::Count,
    ),
    field(
        "num_arvores_remanescentes",
        "Nº de Árvores Remanescentes",
        FieldClass::Count,
    ),
    field(
        "num_arvores_por_hectare",
        "Nº de Árvores por Hectare",
        FieldClass::Count,
    ),
    field("matricula", "Matrícula", FieldClass::Code),
    field("data_plantio", "Data de Plantio", FieldClass::Date),
    field("numero_ccir", "Número CCIR", FieldClass::Code),
    field("numero_itr", "Número ITR", FieldClass::Code),
    field("proprietario", "Proprietário", FieldClass::Text),
    field("arrendatario", "Arrendatário", FieldClass::Text),
    field("data_contrato", "Data do Contrato", FieldClass::Date),
    field(
        "vencimento_contrato",
        "Vencimento do Contrato",
        FieldClass::Date,
    ),
    field("municipio", "Município", FieldClass::Text),
    field("localidade", "Localidade", FieldClass::Text),
    field("altura_desrama", "Altura da Desrama", FieldClass::Decimal),
    field("numero_car", "Número do CAR", FieldClass::Code),
    field("codigo_cc", "Código CC", FieldClass::Code),
];
