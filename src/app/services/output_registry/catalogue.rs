//! Built-in catalogue of LPJ-GUESS output file types
//!
//! Each entry is plain data: key, display name, description, aggregation
//! level, temporal resolution and layer shape. The registry expands the
//! shapes into [`LayerDefinition`]s when it is built.

use super::layers::{LayerDefinition, StaticLayer};
use super::metadata::OutputFileMetadata;
use crate::Result;
use crate::app::models::AggregationLevel::{self, Gridcell, Individual, Patch, Stand};
use crate::app::models::TemporalResolution::{self, Annual, Daily};
use crate::app::models::Unit;
use crate::constants::{MONTH_COLUMNS, TOTAL_COLUMN};

/// Shape of the data columns of a catalogue entry
#[derive(Debug, Clone, Copy)]
pub enum LayerShape {
    /// Explicit (column, name, unit) triples
    Explicit(&'static [(&'static str, &'static str, &'static str)]),

    /// Column names sharing one unit
    Columns(&'static [&'static str], &'static str),

    /// One column per PFT, all sharing one unit
    Pft(&'static str),

    /// Twelve month columns plus Total, sharing one unit
    Monthly(&'static str),
}

/// One row of the built-in catalogue
#[derive(Debug, Clone, Copy)]
pub struct CatalogueEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: AggregationLevel,
    pub resolution: TemporalResolution,
    pub shape: LayerShape,
}

impl CatalogueEntry {
    /// Expand the entry into registry metadata
    pub fn to_metadata(&self) -> Result<OutputFileMetadata> {
        let layers = match self.shape {
            LayerShape::Explicit(triples) => LayerDefinition::fixed(
                triples
                    .iter()
                    .map(|(column, name, unit)| StaticLayer::new(*column, *name, Unit::new(*unit)))
                    .collect(),
            ),
            LayerShape::Columns(columns, unit) => {
                LayerDefinition::columns_with_unit(columns, Unit::new(unit))
            }
            LayerShape::Pft(unit) => {
                LayerDefinition::dynamic(Unit::new(unit), self.level, self.resolution)
            }
            LayerShape::Monthly(unit) => {
                let mut columns: Vec<&str> = MONTH_COLUMNS.to_vec();
                columns.push(TOTAL_COLUMN);
                LayerDefinition::columns_with_unit(&columns, Unit::new(unit))
            }
        };

        OutputFileMetadata::new(
            self.key,
            self.name,
            self.description,
            self.level,
            self.resolution,
            layers,
        )
    }
}

const fn pft(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    level: AggregationLevel,
    resolution: TemporalResolution,
    unit: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        key,
        name,
        description,
        level,
        resolution,
        shape: LayerShape::Pft(unit),
    }
}

const fn columns(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    level: AggregationLevel,
    resolution: TemporalResolution,
    columns: &'static [&'static str],
    unit: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        key,
        name,
        description,
        level,
        resolution,
        shape: LayerShape::Columns(columns, unit),
    }
}

const fn explicit(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    level: AggregationLevel,
    resolution: TemporalResolution,
    layers: &'static [(&'static str, &'static str, &'static str)],
) -> CatalogueEntry {
    CatalogueEntry {
        key,
        name,
        description,
        level,
        resolution,
        shape: LayerShape::Explicit(layers),
    }
}

const fn monthly(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    unit: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        key,
        name,
        description,
        level: Gridcell,
        resolution: TemporalResolution::Monthly,
        shape: LayerShape::Monthly(unit),
    }
}

// =============================================================================
// Shared column sets
// =============================================================================

const SOIL_LAYERS: &[&str] = &[
    "0-10cm", "10-20cm", "20-30cm", "30-40cm", "40-50cm", "50-60cm", "60-70cm", "70-80cm",
    "80-90cm", "90-100cm", "100-110cm", "110-120cm", "120-130cm", "130-140cm", "140-150cm",
];

const CFLUX_COLUMNS: &[&str] = &["Veg", "Repr", "Soil", "Fire", "Est", "NEE"];
const CPOOL_COLUMNS: &[&str] = &["VegC", "LitterC", "SoilfC", "SoilsC", "Total"];
const NPOOL_COLUMNS: &[&str] = &["VegN", "LitterN", "SoilfN", "SoilsN", "Total"];
const NFLUX_COLUMNS: &[&str] = &["dep", "fix", "fert", "flux", "leach", "NEE"];
const NGAS_COLUMNS: &[&str] = &["NH3", "NOx", "N2O", "N2", "Total"];
const NSOURCE_COLUMNS: &[&str] = &[
    "NH4dep", "NO3dep", "fix", "fert", "input", "min", "imm", "netmin", "Total",
];
const RUNOFF_COLUMNS: &[&str] = &["Surf", "Drain", "Base", "Total"];
const SOM_POOLS: &[&str] = &[
    "SURFSTRUCT", "SOILSTRUCT", "SOILMICRO", "SURFHUMUS", "SURFMICRO", "SURFMETA", "SURFFWD",
    "SURFCWD", "SOILMETA", "SLOWSOM", "PASSIVESOM",
];

// =============================================================================
// Catalogue
// =============================================================================

/// Every output file type known to the importer
#[rustfmt::skip]
pub const CATALOGUE: &[CatalogueEntry] = &[
    // Annual gridcell output, one column per PFT
    pft("file_cmass", "Carbon mass", "Vegetation carbon biomass per PFT", Gridcell, Annual, "kgC/m2"),
    pft("file_cmass_leaf", "Leaf carbon mass", "Leaf carbon biomass per PFT", Gridcell, Annual, "kgC/m2"),
    pft("file_cmass_root", "Root carbon mass", "Fine root carbon biomass per PFT", Gridcell, Annual, "kgC/m2"),
    pft("file_cmass_wood", "Wood carbon mass", "Sapwood and heartwood carbon per PFT", Gridcell, Annual, "kgC/m2"),
    pft("file_anpp", "Annual NPP", "Annual net primary production per PFT", Gridcell, Annual, "kgC/m2/year"),
    pft("file_agpp", "Annual GPP", "Annual gross primary production per PFT", Gridcell, Annual, "kgC/m2/year"),
    pft("file_fpc", "Foliar projective cover", "Fraction of ground covered by foliage per PFT", Gridcell, Annual, "m2/m2"),
    pft("file_aaet", "Annual AET", "Annual actual evapotranspiration per PFT", Gridcell, Annual, "mm/year"),
    pft("file_lai", "Leaf area index", "Annual maximum leaf area index per PFT", Gridcell, Annual, "m2/m2"),
    pft("file_dens", "Tree density", "Density of individuals per PFT", Gridcell, Annual, "indiv/m2"),
    pft("file_speciesheights", "Species heights", "Mean height of individuals per PFT", Gridcell, Annual, "m"),
    pft("file_speciesdiam", "Species diameters", "Mean stem diameter per PFT", Gridcell, Annual, "m"),
    pft("file_clitter", "Litter carbon", "Litter carbon mass per PFT", Gridcell, Annual, "kgC/m2"),
    pft("file_nmass", "Nitrogen mass", "Vegetation nitrogen mass per PFT", Gridcell, Annual, "kgN/m2"),
    pft("file_nmass_leaf", "Leaf nitrogen mass", "Leaf nitrogen mass per PFT", Gridcell, Annual, "kgN/m2"),
    pft("file_nmass_root", "Root nitrogen mass", "Fine root nitrogen mass per PFT", Gridcell, Annual, "kgN/m2"),
    pft("file_nmass_wood", "Wood nitrogen mass", "Sapwood and heartwood nitrogen per PFT", Gridcell, Annual, "kgN/m2"),
    pft("file_nlitter", "Litter nitrogen", "Litter nitrogen mass per PFT", Gridcell, Annual, "kgN/m2"),
    pft("file_cton_leaf", "Leaf C:N ratio", "Leaf carbon to nitrogen ratio per PFT", Gridcell, Annual, "kgC/kgN"),
    pft("file_nuptake", "Nitrogen uptake", "Annual nitrogen uptake per PFT", Gridcell, Annual, "kgN/m2/year"),
    pft("file_vmaxnlim", "Vmax nitrogen limitation", "Nitrogen limitation on maximum carboxylation per PFT", Gridcell, Annual, "0-1"),
    pft("file_aiso", "Annual isoprene", "Annual isoprene emission per PFT", Gridcell, Annual, "mgC/m2/year"),
    pft("file_amon", "Annual monoterpenes", "Annual monoterpene emission per PFT", Gridcell, Annual, "mgC/m2/year"),
    pft("file_yield", "Crop yield", "Harvested crop yield per crop PFT", Gridcell, Annual, "kgC/m2/year"),
    pft("file_sla", "Specific leaf area", "Specific leaf area per PFT", Gridcell, Annual, "m2/kgC"),
    // Annual gridcell output with fixed columns
    explicit("file_cflux", "Carbon fluxes", "Annual carbon fluxes between vegetation, soil and atmosphere", Gridcell, Annual, &[
        ("Veg", "Vegetation NPP", "kgC/m2/year"),
        ("Repr", "Reproduction", "kgC/m2/year"),
        ("Soil", "Soil respiration", "kgC/m2/year"),
        ("Fire", "Fire emissions", "kgC/m2/year"),
        ("Est", "Establishment", "kgC/m2/year"),
        ("NEE", "Net ecosystem exchange", "kgC/m2/year"),
    ]),
    columns("file_cpool", "Carbon pools", "Carbon stored in vegetation, litter and soil", Gridcell, Annual, CPOOL_COLUMNS, "kgC/m2"),
    explicit("file_firert", "Fire return time", "Mean fire return interval", Gridcell, Annual, &[
        ("FireRT", "Fire return time", "years"),
    ]),
    columns("file_runoff", "Runoff", "Annual surface, drainage and base runoff", Gridcell, Annual, RUNOFF_COLUMNS, "mm/year"),
    columns("file_doc", "Dissolved organic carbon", "Annual leaching of dissolved organic carbon", Gridcell, Annual, &["Total"], "kgC/m2/year"),
    columns("file_nflux", "Nitrogen fluxes", "Annual nitrogen deposition, fixation, fertilisation and losses", Gridcell, Annual, NFLUX_COLUMNS, "kgN/ha/year"),
    columns("file_npool", "Nitrogen pools", "Nitrogen stored in vegetation, litter and soil", Gridcell, Annual, NPOOL_COLUMNS, "kgN/m2"),
    columns("file_ngases", "Nitrogen gases", "Annual gaseous nitrogen emissions", Gridcell, Annual, NGAS_COLUMNS, "kgN/ha/year"),
    columns("file_nsources", "Nitrogen sources", "Annual nitrogen inputs and mineralisation", Gridcell, Annual, NSOURCE_COLUMNS, "gN/ha/year"),
    explicit("file_seasonality", "Climate seasonality", "Seasonality classification of the gridcell climate", Gridcell, Annual, &[
        ("seasonality_type", "Seasonality type", "-"),
        ("temp_seasonality", "Temperature seasonality", "-"),
        ("prec_range", "Precipitation range", "-"),
    ]),
    explicit("file_aclimate", "Annual climate", "Annual mean climate drivers", Gridcell, Annual, &[
        ("temp", "Mean air temperature", "°C"),
        ("prec", "Total precipitation", "mm/year"),
        ("insol", "Mean insolation", "W/m2"),
        ("co2", "Atmospheric CO2", "ppm"),
    ]),
    // Monthly gridcell output
    monthly("file_mnpp", "Monthly NPP", "Monthly net primary production", "kgC/m2/month"),
    monthly("file_mgpp", "Monthly GPP", "Monthly gross primary production", "kgC/m2/month"),
    monthly("file_mlai", "Monthly LAI", "Monthly leaf area index", "m2/m2"),
    monthly("file_mra", "Monthly autotrophic respiration", "Monthly autotrophic respiration", "kgC/m2/month"),
    monthly("file_mrh", "Monthly heterotrophic respiration", "Monthly heterotrophic respiration", "kgC/m2/month"),
    monthly("file_mnee", "Monthly NEE", "Monthly net ecosystem exchange", "kgC/m2/month"),
    monthly("file_maet", "Monthly AET", "Monthly actual evapotranspiration", "mm/month"),
    monthly("file_mpet", "Monthly PET", "Monthly potential evapotranspiration", "mm/month"),
    monthly("file_mevap", "Monthly evaporation", "Monthly soil evaporation", "mm/month"),
    monthly("file_mrunoff", "Monthly runoff", "Monthly total runoff", "mm/month"),
    monthly("file_mintercep", "Monthly interception", "Monthly canopy interception", "mm/month"),
    monthly("file_mwcont_upper", "Monthly upper soil water", "Monthly water content of the upper soil layer", "0-1"),
    monthly("file_mwcont_lower", "Monthly lower soil water", "Monthly water content of the lower soil layer", "0-1"),
    monthly("file_msnow", "Monthly snow", "Monthly snow water equivalent", "mm"),
    monthly("file_miso", "Monthly isoprene", "Monthly isoprene emission", "mgC/m2/month"),
    monthly("file_mmon", "Monthly monoterpenes", "Monthly monoterpene emission", "mgC/m2/month"),
    monthly("file_mburned_area", "Monthly burned area", "Monthly fraction of the gridcell burned", "0-1"),
    monthly("file_mprec", "Monthly precipitation", "Monthly precipitation", "mm/month"),
    monthly("file_mtemp", "Monthly temperature", "Monthly mean air temperature", "°C"),
    monthly("file_minsol", "Monthly insolation", "Monthly mean insolation", "W/m2"),
    // Daily patch output, one column per PFT
    pft("file_dave_lai", "Daily LAI", "Daily leaf area index per PFT", Patch, Daily, "m2/m2"),
    pft("file_dave_fpc", "Daily FPC", "Daily foliar projective cover per PFT", Patch, Daily, "m2/m2"),
    pft("file_dave_crownarea", "Daily crown area", "Mean crown area per PFT", Patch, Daily, "m2"),
    pft("file_dave_agd_g", "Daily gross photosynthesis", "Daily gross leaf-level photosynthesis per PFT", Patch, Daily, "gC/m2/day"),
    pft("file_dave_rd_g", "Daily leaf respiration", "Daily leaf respiration per PFT", Patch, Daily, "gC/m2/day"),
    pft("file_dave_au", "Daily water uptake", "Daily root water uptake per PFT", Patch, Daily, "mm/day"),
    pft("file_dave_dens", "Daily density", "Density of individuals per PFT", Patch, Daily, "indiv/m2"),
    pft("file_dave_height", "Daily height", "Mean height of individuals per PFT", Patch, Daily, "m"),
    pft("file_dave_diameter", "Daily diameter", "Mean stem diameter per PFT", Patch, Daily, "m"),
    pft("file_dave_cmass", "Daily carbon mass", "Total carbon biomass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_leaf", "Daily leaf carbon", "Leaf carbon mass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_root", "Daily root carbon", "Fine root carbon mass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_sap", "Daily sapwood carbon", "Sapwood carbon mass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_heart", "Daily heartwood carbon", "Heartwood carbon mass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_repr", "Daily reproductive carbon", "Reproductive carbon mass per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_cmass_storage", "Daily storage carbon", "Labile storage carbon per PFT", Patch, Daily, "kgC/m2"),
    pft("file_dave_nmass", "Daily nitrogen mass", "Total nitrogen mass per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_nmass_leaf", "Daily leaf nitrogen", "Leaf nitrogen mass per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_nmass_root", "Daily root nitrogen", "Fine root nitrogen mass per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_nmass_sap", "Daily sapwood nitrogen", "Sapwood nitrogen mass per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_nmass_heart", "Daily heartwood nitrogen", "Heartwood nitrogen mass per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_nmass_storage", "Daily storage nitrogen", "Labile storage nitrogen per PFT", Patch, Daily, "kgN/m2"),
    pft("file_dave_cton_leaf", "Daily leaf C:N", "Leaf carbon to nitrogen ratio per PFT", Patch, Daily, "kgC/kgN"),
    pft("file_dave_ndemand", "Daily nitrogen demand", "Daily nitrogen demand per PFT", Patch, Daily, "kgN/m2/day"),
    pft("file_dave_nuptake", "Daily nitrogen uptake", "Daily nitrogen uptake per PFT", Patch, Daily, "kgN/m2/day"),
    pft("file_dave_vmaxnlim", "Daily Vmax nitrogen limitation", "Nitrogen limitation on maximum carboxylation per PFT", Patch, Daily, "0-1"),
    pft("file_dave_nscal", "Daily nitrogen stress", "Nitrogen stress scalar per PFT", Patch, Daily, "0-1"),
    pft("file_dave_wscal", "Daily water stress", "Water stress scalar per PFT", Patch, Daily, "0-1"),
    pft("file_dave_sla", "Daily specific leaf area", "Specific leaf area per PFT", Patch, Daily, "m2/kgC"),
    pft("file_dave_fphen_activity", "Phenological activity", "Phenological activity fraction per PFT", Patch, Daily, "0-1"),
    pft("file_dave_fdev_growth", "Development growth fraction", "Fraction of growth allocated to development per PFT", Patch, Daily, "0-1"),
    pft("file_dave_frepr_cstruct", "Reproductive structural fraction", "Fraction of structural carbon in reproductive organs per PFT", Patch, Daily, "0-1"),
    pft("file_dave_growingseason", "Growing season", "Growing season indicator per PFT", Patch, Daily, "0-1"),
    pft("file_dave_fpar", "Daily FPAR", "Fraction of absorbed photosynthetically active radiation per PFT", Patch, Daily, "0-1"),
    pft("file_dave_apar", "Daily APAR", "Absorbed photosynthetically active radiation per PFT", Patch, Daily, "MJ/m2/day"),
    pft("file_dave_gpp", "Daily GPP", "Daily gross primary production per PFT", Patch, Daily, "kgC/m2/day"),
    pft("file_dave_npp", "Daily NPP", "Daily net primary production per PFT", Patch, Daily, "kgC/m2/day"),
    pft("file_dave_resp", "Daily autotrophic respiration", "Daily autotrophic respiration per PFT", Patch, Daily, "kgC/m2/day"),
    pft("file_dave_aet", "Daily AET", "Daily actual evapotranspiration per PFT", Patch, Daily, "mm/day"),
    pft("file_dave_ci", "Leaf internal CO2", "Leaf intercellular CO2 concentration per PFT", Patch, Daily, "ppm"),
    pft("file_dave_vm", "Rubisco capacity", "Daily Rubisco capacity per PFT", Patch, Daily, "gC/m2/day"),
    pft("file_dave_leaf_age", "Leaf age", "Mean leaf age per PFT", Patch, Daily, "days"),
    // Daily output with fixed columns
    explicit("file_dave_met", "Daily meteorology", "Daily climate drivers of the gridcell", Gridcell, Daily, &[
        ("prec", "Precipitation", "mm"),
        ("temp", "Air temperature", "°C"),
        ("insol", "Insolation", "W/m2"),
        ("pet", "Potential evapotranspiration", "mm"),
        ("co2", "Atmospheric CO2", "ppm"),
    ]),
    columns("file_dave_sw", "Soil water", "Daily soil water content by layer", Patch, Daily, SOIL_LAYERS, "mm"),
    columns("file_dave_swvol", "Volumetric soil water", "Daily volumetric soil water content by layer", Patch, Daily, SOIL_LAYERS, "m3/m3"),
    columns("file_dave_ts", "Soil temperature", "Daily soil temperature by layer", Patch, Daily, SOIL_LAYERS, "°C"),
    explicit("file_dave_water", "Daily water fluxes", "Daily transpiration, evaporation and interception", Patch, Daily, &[
        ("transp", "Transpiration", "mm/day"),
        ("evap", "Soil evaporation", "mm/day"),
        ("intercep", "Canopy interception", "mm/day"),
    ]),
    columns("file_dave_runoff", "Daily runoff", "Daily surface, drainage and base runoff", Patch, Daily, RUNOFF_COLUMNS, "mm/day"),
    explicit("file_dave_snow", "Daily snow", "Daily snow pack and depth", Patch, Daily, &[
        ("snowpack", "Snow water equivalent", "mm"),
        ("snowdepth", "Snow depth", "m"),
    ]),
    columns("file_dave_cflux", "Daily carbon fluxes", "Daily carbon fluxes between vegetation, soil and atmosphere", Patch, Daily, CFLUX_COLUMNS, "kgC/m2/day"),
    columns("file_dave_cpool", "Daily carbon pools", "Daily carbon stored in vegetation, litter and soil", Patch, Daily, CPOOL_COLUMNS, "kgC/m2"),
    columns("file_dave_nflux", "Daily nitrogen fluxes", "Daily nitrogen deposition, fixation, fertilisation and losses", Patch, Daily, NFLUX_COLUMNS, "kgN/m2/day"),
    columns("file_dave_npool", "Daily nitrogen pools", "Daily nitrogen stored in vegetation, litter and soil", Patch, Daily, NPOOL_COLUMNS, "kgN/m2"),
    columns("file_dave_ngases", "Daily nitrogen gases", "Daily gaseous nitrogen emissions", Patch, Daily, NGAS_COLUMNS, "kgN/m2/day"),
    columns("file_dave_nsources", "Daily nitrogen sources", "Daily nitrogen inputs and mineralisation", Patch, Daily, NSOURCE_COLUMNS, "kgN/m2/day"),
    columns("file_dave_ninput", "Daily nitrogen input", "Daily external nitrogen input", Patch, Daily, &["dep", "fix", "fert", "Total"], "kgN/m2/day"),
    columns("file_dave_soil_nmin", "Soil mineral nitrogen", "Daily soil ammonium and nitrate", Patch, Daily, &["NH4", "NO3", "Total"], "kgN/m2"),
    columns("file_dave_sompool_acmass", "SOM pool carbon", "Daily carbon mass of each soil organic matter pool", Patch, Daily, SOM_POOLS, "kgC/m2"),
    columns("file_dave_sompool_anmass", "SOM pool nitrogen", "Daily nitrogen mass of each soil organic matter pool", Patch, Daily, SOM_POOLS, "kgN/m2"),
    explicit("file_dave_litter", "Daily litter", "Daily litter carbon by plant organ", Patch, Daily, &[
        ("leaf", "Leaf litter", "kgC/m2"),
        ("root", "Root litter", "kgC/m2"),
        ("wood", "Woody litter", "kgC/m2"),
        ("repr", "Reproductive litter", "kgC/m2"),
    ]),
    explicit("file_dave_patch_age", "Patch age", "Years since the last patch-destroying disturbance", Patch, Daily, &[
        ("age", "Patch age", "years"),
    ]),
    explicit("file_dave_fire", "Daily fire", "Daily fire probability and carbon emissions", Patch, Daily, &[
        ("prob", "Fire probability", "0-1"),
        ("cflux", "Fire carbon emission", "kgC/m2/day"),
    ]),
    // Stand output
    explicit("file_dave_stand_frac", "Stand fraction", "Fraction of the gridcell covered by each stand", Stand, Annual, &[
        ("frac", "Stand fraction", "0-1"),
    ]),
    pft("file_dave_stand_cmass", "Stand carbon mass", "Daily carbon biomass per PFT and stand", Stand, Daily, "kgC/m2"),
    pft("file_dave_stand_lai", "Stand LAI", "Daily leaf area index per PFT and stand", Stand, Daily, "m2/m2"),
    pft("file_dave_stand_npp", "Stand NPP", "Daily net primary production per PFT and stand", Stand, Daily, "kgC/m2/day"),
    columns("file_dave_stand_cflux", "Stand carbon fluxes", "Daily carbon fluxes per stand", Stand, Daily, CFLUX_COLUMNS, "kgC/m2/day"),
    columns("file_dave_stand_cpool", "Stand carbon pools", "Daily carbon pools per stand", Stand, Daily, CPOOL_COLUMNS, "kgC/m2"),
    // Individual output
    explicit("file_dave_indiv_cpool", "Individual carbon pools", "Daily carbon mass of each organ of an individual", Individual, Daily, &[
        ("cmass_leaf", "Leaf carbon", "kgC"),
        ("cmass_root", "Root carbon", "kgC"),
        ("cmass_sap", "Sapwood carbon", "kgC"),
        ("cmass_heart", "Heartwood carbon", "kgC"),
        ("cmass_debt", "Carbon debt", "kgC"),
        ("cmass_repr", "Reproductive carbon", "kgC"),
        ("cmass_storage", "Storage carbon", "kgC"),
    ]),
    explicit("file_dave_indiv_npool", "Individual nitrogen pools", "Daily nitrogen mass of each organ of an individual", Individual, Daily, &[
        ("nmass_leaf", "Leaf nitrogen", "kgN"),
        ("nmass_root", "Root nitrogen", "kgN"),
        ("nmass_sap", "Sapwood nitrogen", "kgN"),
        ("nmass_heart", "Heartwood nitrogen", "kgN"),
        ("nmass_storage", "Storage nitrogen", "kgN"),
    ]),
    explicit("file_dave_indiv_lai", "Individual LAI", "Daily leaf area index of an individual", Individual, Daily, &[
        ("lai", "Leaf area index", "m2/m2"),
    ]),
    explicit("file_dave_indiv_height", "Individual height", "Daily height of an individual", Individual, Daily, &[
        ("height", "Height", "m"),
    ]),
    explicit("file_dave_indiv_diameter", "Individual diameter", "Daily stem diameter of an individual", Individual, Daily, &[
        ("diameter", "Stem diameter", "m"),
    ]),
    explicit("file_dave_indiv_density", "Individual density", "Density of the cohort an individual represents", Individual, Daily, &[
        ("density", "Density", "indiv/m2"),
    ]),
    explicit("file_dave_indiv_age", "Individual age", "Age of an individual", Individual, Daily, &[
        ("age", "Age", "years"),
    ]),
    explicit("file_dave_indiv_crownarea", "Individual crown area", "Crown area of an individual", Individual, Daily, &[
        ("crownarea", "Crown area", "m2"),
    ]),
    explicit("file_dave_indiv_fpc", "Individual FPC", "Foliar projective cover of an individual", Individual, Daily, &[
        ("fpc", "Foliar projective cover", "m2/m2"),
    ]),
    explicit("file_dave_indiv_npp", "Individual NPP", "Daily net primary production of an individual", Individual, Daily, &[
        ("npp", "Net primary production", "kgC/day"),
    ]),
    explicit("file_dave_indiv_gpp", "Individual GPP", "Daily gross primary production of an individual", Individual, Daily, &[
        ("gpp", "Gross primary production", "kgC/day"),
    ]),
    explicit("file_dave_indiv_resp", "Individual respiration", "Daily maintenance and growth respiration of an individual", Individual, Daily, &[
        ("resp_maint", "Maintenance respiration", "kgC/day"),
        ("resp_growth", "Growth respiration", "kgC/day"),
    ]),
    // Annual patch output, one column per PFT
    pft("file_dave_alai", "Annual patch LAI", "Annual maximum leaf area index per PFT", Patch, Annual, "m2/m2"),
    pft("file_dave_afpc", "Annual patch FPC", "Annual foliar projective cover per PFT", Patch, Annual, "m2/m2"),
    pft("file_dave_acmass", "Annual patch carbon mass", "Annual carbon biomass per PFT", Patch, Annual, "kgC/m2"),
    pft("file_dave_anmass", "Annual patch nitrogen mass", "Annual nitrogen mass per PFT", Patch, Annual, "kgN/m2"),
    pft("file_dave_anpp", "Annual patch NPP", "Annual net primary production per PFT", Patch, Annual, "kgC/m2/year"),
    pft("file_dave_agpp", "Annual patch GPP", "Annual gross primary production per PFT", Patch, Annual, "kgC/m2/year"),
    pft("file_dave_aresp", "Annual patch respiration", "Annual autotrophic respiration per PFT", Patch, Annual, "kgC/m2/year"),
    pft("file_dave_adens", "Annual patch density", "Density of individuals per PFT", Patch, Annual, "indiv/m2"),
    pft("file_dave_aheight", "Annual patch height", "Mean height of individuals per PFT", Patch, Annual, "m"),
    pft("file_dave_aaet", "Annual patch AET", "Annual actual evapotranspiration per PFT", Patch, Annual, "mm/year"),
    pft("file_dave_acton_leaf", "Annual patch leaf C:N", "Annual leaf carbon to nitrogen ratio per PFT", Patch, Annual, "kgC/kgN"),
    pft("file_dave_aburned_area", "Annual patch burned area", "Fraction of the patch burned per PFT", Patch, Annual, "0-1"),
    // Annual patch output with fixed columns
    columns("file_dave_acflux", "Annual patch carbon fluxes", "Annual carbon fluxes per patch", Patch, Annual, CFLUX_COLUMNS, "kgC/m2/year"),
    columns("file_dave_acpool", "Annual patch carbon pools", "Annual carbon pools per patch", Patch, Annual, CPOOL_COLUMNS, "kgC/m2"),
    columns("file_dave_anflux", "Annual patch nitrogen fluxes", "Annual nitrogen fluxes per patch", Patch, Annual, NFLUX_COLUMNS, "kgN/ha/year"),
    columns("file_dave_anpool", "Annual patch nitrogen pools", "Annual nitrogen pools per patch", Patch, Annual, NPOOL_COLUMNS, "kgN/m2"),
    columns("file_dave_arunoff", "Annual patch runoff", "Annual runoff per patch", Patch, Annual, RUNOFF_COLUMNS, "mm/year"),
    columns("file_dave_asompool_acmass", "Annual SOM pool carbon", "Annual carbon mass of each soil organic matter pool", Patch, Annual, SOM_POOLS, "kgC/m2"),
    explicit("file_dave_awater", "Annual patch water fluxes", "Annual transpiration, evaporation and interception per patch", Patch, Annual, &[
        ("transp", "Transpiration", "mm/year"),
        ("evap", "Soil evaporation", "mm/year"),
        ("intercep", "Canopy interception", "mm/year"),
    ]),
    // Annual individual output
    explicit("file_dave_indiv_annual", "Annual individual summary", "Annual size and production of an individual", Individual, Annual, &[
        ("height", "Height", "m"),
        ("diameter", "Stem diameter", "m"),
        ("cmass", "Carbon mass", "kgC"),
        ("anpp", "Net primary production", "kgC/year"),
    ]),
];
