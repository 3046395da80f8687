//! Shared sample documents for unit tests.

/// Six channels: two temperatures, conductivity, a free slot and both user sensors.
pub const XMLCON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SBE_InstrumentConfiguration SB_ConfigCTD_FileVersion="7.26.7.0">
  <Instrument Type="8">
    <Name>SBE 911plus/917plus CTD</Name>
    <FrequencyChannelsSuppressed>0</FrequencyChannelsSuppressed>
    <VoltageWordsSuppressed>1</VoltageWordsSuppressed>
    <ComputerInterface>0</ComputerInterface>
    <ScanTimeAdded>0</ScanTimeAdded>
    <SurfaceParVoltageAdded>0</SurfaceParVoltageAdded>
    <NmeaPositionDataAdded>1</NmeaPositionDataAdded>
    <NmeaDepthDataAdded>0</NmeaDepthDataAdded>
    <NmeaTimeAdded>1</NmeaTimeAdded>
    <SensorArray Size="6">
      <Sensor index="0" SensorID="55">
        <TemperatureSensor SensorID="55">
          <SerialNumber>5678</SerialNumber>
          <CalibrationDate>12-Mar-21</CalibrationDate>
          <UseG_J>1</UseG_J>
          <G>4.38e-003</G>
          <H>6.43e-004</H>
          <F0>1000.000</F0>
        </TemperatureSensor>
      </Sensor>
      <Sensor index="1" SensorID="3">
        <ConductivitySensor SensorID="3">
          <SerialNumber>4321</SerialNumber>
          <Coefficients equation="0">
            <A>1.0e-005</A>
            <B>1.3</B>
          </Coefficients>
          <Coefficients equation="1">
            <G>-10.1</G>
            <H>1.45</H>
          </Coefficients>
        </ConductivitySensor>
      </Sensor>
      <Sensor index="2" SensorID="55">
        <TemperatureSensor SensorID="55">
          <SerialNumber>5679</SerialNumber>
          <G>4.39e-003</G>
        </TemperatureSensor>
      </Sensor>
      <Sensor index="3" SensorID="27">
        <NotInUse SensorID="27"/>
      </Sensor>
      <Sensor index="4" SensorID="80">
        <UserExponentialSensor SensorID="80">
          <SerialNumber/>
          <SensorName>Oxygen</SensorName>
          <SensorUnits>ml/l</SensorUnits>
          <A>1.0</A>
        </UserExponentialSensor>
      </Sensor>
      <Sensor index="5" SensorID="61">
        <UserPolynomialSensor SensorID="61">
          <SensorName/>
          <A0>0.0</A0>
        </UserPolynomialSensor>
      </Sensor>
    </SensorArray>
  </Instrument>
</SBE_InstrumentConfiguration>
"#;

pub const VARIABLES_CSV: &str = "SensorID,CalcID,UnitID,Description
55,1,3,Temperature [ITS-90 deg C]
3,3,7,Conductivity [S/m]
80,71,0,User Exponential
61,72,0,User Polynomial
";

pub const TEMPLATE_LIBRARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SensorTemplates>
  <CalcArrayItem index="0" CalcID="39">
    <Calc UnitID="11" Ordinal="0">
      <FullName value="Latitude [deg]"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="40">
    <Calc UnitID="11" Ordinal="0">
      <FullName value="Longitude [deg]"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="1">
    <Calc UnitID="4" Ordinal="0">
      <FullName value="Temperature$ordinal [ITS-90, deg F]"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="1">
    <Calc UnitID="3" Ordinal="0">
      <FullName value="Temperature$ordinal [ITS-90, deg C]"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="3">
    <Calc UnitID="7" Ordinal="0">
      <FullName value="Conductivity$ordinal [S/m]"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="71">
    <Calc UnitID="0" Ordinal="0">
      <FullName value="User Exponential$ordinal"/>
      <CalcName value=""/>
      <CalcUnits value=""/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="72">
    <Calc UnitID="0" Ordinal="0">
      <FullName value="User Polynomial$ordinal"/>
      <CalcName value=""/>
      <CalcUnits value="volts"/>
    </Calc>
  </CalcArrayItem>
  <CalcArrayItem index="0" CalcID="69">
    <Calc UnitID="0" Ordinal="0">
      <FullName value="Pump Status"/>
    </Calc>
  </CalcArrayItem>
</SensorTemplates>
"#;

pub const PSA_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Data_Conversion>
  <Version value="7.26.7.129"/>
  <ServerName value="Data Conversion"/>
  <OutputFile value=""/>
  <CalcArray Size="0">
  </CalcArray>
</Data_Conversion>
"#;
