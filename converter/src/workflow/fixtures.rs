pub const XMLCON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SBE_InstrumentConfiguration>
  <Instrument Type="8">
    <FrequencyChannelsSuppressed>0</FrequencyChannelsSuppressed>
    <VoltageWordsSuppressed>0</VoltageWordsSuppressed>
    <ScanTimeAdded>1</ScanTimeAdded>
    <SurfaceParVoltageAdded>0</SurfaceParVoltageAdded>
    <NmeaPositionDataAdded>1</NmeaPositionDataAdded>
    <NmeaDepthDataAdded>0</NmeaDepthDataAdded>
    <NmeaTimeAdded>0</NmeaTimeAdded>
    <SensorArray Size="3">
      <Sensor index="0" SensorID="1">
        <TemperatureSensor SensorID="1"><SerialNumber>1</SerialNumber></TemperatureSensor>
      </Sensor>
      <Sensor index="1" SensorID="27">
        <NotInUse SensorID="27"/>
      </Sensor>
      <Sensor index="2" SensorID="3">
        <ConductivitySensor SensorID="3"><SerialNumber>2</SerialNumber></ConductivitySensor>
      </Sensor>
    </SensorArray>
  </Instrument>
</SBE_InstrumentConfiguration>
"#;

pub const VARIABLES_CSV: &str = "SensorID,CalcID,UnitID\n1,1,3\n3,3,7\n";

pub const TEMPLATE_LIBRARY: &str = r#"<Templates>
  <CalcArrayItem CalcID="39"><Calc UnitID="11"><FullName value="Latitude [deg]"/></Calc></CalcArrayItem>
  <CalcArrayItem CalcID="40"><Calc UnitID="11"><FullName value="Longitude [deg]"/></Calc></CalcArrayItem>
  <CalcArrayItem CalcID="1"><Calc UnitID="3"><FullName value="Temperature$ordinal [ITS-90, deg C]"/></Calc></CalcArrayItem>
  <CalcArrayItem CalcID="3"><Calc UnitID="7"><FullName value="Conductivity$ordinal [S/m]"/></Calc></CalcArrayItem>
  <CalcArrayItem CalcID="69"><Calc UnitID="0"><FullName value="Pump Status"/></Calc></CalcArrayItem>
</Templates>
"#;

pub const PSA_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Data_Conversion><CalcArray Size="0"/></Data_Conversion>
"#;
