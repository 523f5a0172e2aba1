//! Car assets a vehicle can be rendered as.

use std::fmt;

/// Visual model of a vehicle.  Opaque to the simulation; carried so the
/// renderer can pick the matching asset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleModel {
    Firetruck,
    Ambulance,
    Delivery,
    DeliveryFlat,
    GarbageTruck,
    HatchbackSports,
    Police,
    #[default]
    Sedan,
    SedanSports,
    Suv,
    SuvLuxury,
    Taxi,
    Tractor,
    TractorShovel,
    Truck,
    TruckFlat,
    Van,
}

impl VehicleModel {
    pub const ALL: [VehicleModel; 17] = [
        VehicleModel::Firetruck,
        VehicleModel::Ambulance,
        VehicleModel::Delivery,
        VehicleModel::DeliveryFlat,
        VehicleModel::GarbageTruck,
        VehicleModel::HatchbackSports,
        VehicleModel::Police,
        VehicleModel::Sedan,
        VehicleModel::SedanSports,
        VehicleModel::Suv,
        VehicleModel::SuvLuxury,
        VehicleModel::Taxi,
        VehicleModel::Tractor,
        VehicleModel::TractorShovel,
        VehicleModel::Truck,
        VehicleModel::TruckFlat,
        VehicleModel::Van,
    ];

    /// Asset file stem, e.g. `"garbageTruck"`.
    pub fn asset_name(self) -> &'static str {
        match self {
            VehicleModel::Firetruck       => "firetruck",
            VehicleModel::Ambulance       => "ambulance",
            VehicleModel::Delivery        => "delivery",
            VehicleModel::DeliveryFlat    => "deliveryFlat",
            VehicleModel::GarbageTruck    => "garbageTruck",
            VehicleModel::HatchbackSports => "hatchbackSports",
            VehicleModel::Police          => "police",
            VehicleModel::Sedan           => "sedan",
            VehicleModel::SedanSports     => "sedanSports",
            VehicleModel::Suv             => "suv",
            VehicleModel::SuvLuxury       => "suvLuxury",
            VehicleModel::Taxi            => "taxi",
            VehicleModel::Tractor         => "tractor",
            VehicleModel::TractorShovel   => "tractorShovel",
            VehicleModel::Truck           => "truck",
            VehicleModel::TruckFlat       => "truckFlat",
            VehicleModel::Van             => "van",
        }
    }
}

impl fmt::Display for VehicleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}
